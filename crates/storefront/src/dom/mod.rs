//! `web-sys` bindings.
//!
//! Every binder looks its elements up once and silently does nothing when
//! they are missing, so the same bundle works on pages that only carry part
//! of the markup. DOM calls that throw surface as
//! [`StorefrontError::Dom`](crate::error::StorefrontError::Dom) and are
//! logged by the caller.

pub mod cart;
pub mod catalog;
pub mod forms;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::{Result, StorefrontError};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(StorefrontError::NoBrowserContext("window"))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or(StorefrontError::NoBrowserContext("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document
        .body()
        .ok_or(StorefrontError::NoBrowserContext("body"))
}

/// Element by id, `None` if absent.
#[must_use]
pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// First element matching `selector`, `None` if absent or the selector is invalid.
#[must_use]
pub fn query(root: &Document, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` under `document`, in document order.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

/// All elements matching `selector` under `root`.
#[must_use]
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| collect_elements(&list))
        .unwrap_or_default()
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Text content of the first `selector` match under `root`, empty if absent.
#[must_use]
pub fn text_of(root: &Element, selector: &str) -> String {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

/// Attach a listener for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Page-lifetime listener: the closure must outlive this frame.
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout<F>(window: &Window, delay_ms: i32, f: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)?;
    Ok(handle)
}

/// Run `f` on the next animation frame with the frame timestamp.
pub fn request_frame<F>(window: &Window, f: F) -> Result<i32>
where
    F: FnOnce(f64) + 'static,
{
    let callback = Closure::once_into_js(f);
    Ok(window.request_animation_frame(callback.unchecked_ref())?)
}

/// Show or hide an element through its inline `display` style.
pub fn set_visible(element: &Element, visible: bool) -> Result<()> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        html.style()
            .set_property("display", if visible { "block" } else { "none" })?;
    }
    Ok(())
}

/// Add or remove a class.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<()> {
    if on {
        element.class_list().add_1(class)?;
    } else {
        element.class_list().remove_1(class)?;
    }
    Ok(())
}

/// Absolute vertical offset of an element's top edge in the document.
pub fn document_top(window: &Window, element: &Element) -> Result<f64> {
    Ok(element.get_bounding_client_rect().top() + window.scroll_y()?)
}

/// Create an element with an optional class and text.
pub fn create(
    document: &Document,
    tag: &str,
    class: Option<&str>,
    text: Option<&str>,
) -> Result<Element> {
    let element = document.create_element(tag)?;
    if let Some(class) = class {
        element.set_class_name(class);
    }
    if let Some(text) = text {
        element.set_text_content(Some(text));
    }
    Ok(element)
}
