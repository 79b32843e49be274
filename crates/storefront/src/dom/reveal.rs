//! Entry animations, lazy images and the page `loaded` class.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::app::App;
use crate::dom;
use crate::error::{Result, report};

const REVEAL_SELECTOR: &str = ".fabric-card, .section-title, .cta-section";
const LAZY_SELECTOR: &str = "img[data-src]";

pub fn bind(app: &Rc<App>) -> Result<()> {
    bind_reveal(app)?;
    bind_lazy_images(app)?;
    bind_loaded(app)
}

/// Add `animate-in` to elements as they scroll into view.
fn bind_reveal(app: &App) -> Result<()> {
    let targets = dom::query_all(&app.document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return Ok(());
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer = observe(&options, |entry, _| {
        report("reveal", dom::set_class(&entry.target(), "animate-in", true));
    })?;
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

/// Swap `data-src` into `src` once an image is about to be seen.
fn bind_lazy_images(app: &App) -> Result<()> {
    let images = dom::query_all(&app.document, LAZY_SELECTOR);
    if images.is_empty() {
        return Ok(());
    }

    let observer = observe(&IntersectionObserverInit::new(), |entry, observer| {
        let target = entry.target();
        report("lazy image", load_image(&target));
        observer.unobserve(&target);
    })?;
    for image in &images {
        observer.observe(image);
    }
    Ok(())
}

fn load_image(target: &Element) -> Result<()> {
    if let (Some(image), Some(src)) = (
        target.dyn_ref::<HtmlImageElement>(),
        target.get_attribute("data-src"),
    ) {
        image.set_src(&src);
        dom::set_class(target, "lazy", false)?;
    }
    Ok(())
}

/// Create an observer that calls `on_visible` for each intersecting entry.
fn observe<F>(options: &IntersectionObserverInit, mut on_visible: F) -> Result<IntersectionObserver>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter(IntersectionObserverEntry::is_intersecting)
                .for_each(|entry| on_visible(&entry, &observer));
        },
    );
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    // The observer calls back for as long as the page lives.
    callback.forget();
    Ok(observer)
}

/// Mark `<body>` as `loaded` once the window has finished loading.
fn bind_loaded(app: &Rc<App>) -> Result<()> {
    let body = dom::body(&app.document)?;
    if app.document.ready_state() == "complete" {
        return dom::set_class(&body, "loaded", true);
    }
    dom::on(&app.window, "load", move |_| {
        report("page loaded", dom::set_class(&body, "loaded", true));
    })
}
