//! Mobile menu, smooth anchor scrolling, and scroll-driven effects.

use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::app::App;
use crate::dom;
use crate::error::{Result, report};
use crate::nav::{anchor_target, links_to};
use crate::scroll::{AnimationTicket, ScrollAnimation, active_section, parallax_transform};

pub fn bind(app: &Rc<App>) -> Result<()> {
    bind_mobile_nav(app)?;
    bind_anchors(app)?;
    bind_scroll(app)
}

fn bind_mobile_nav(app: &Rc<App>) -> Result<()> {
    let (Some(toggle), Some(links)) = (
        dom::query(&app.document, ".nav-toggle"),
        dom::query(&app.document, ".nav-links"),
    ) else {
        return Ok(());
    };

    {
        let app = Rc::clone(app);
        let (button, menu) = (toggle.clone(), links.clone());
        dom::on(&toggle, "click", move |_| {
            let open = app.mobile_nav.borrow_mut().toggle();
            report("nav toggle", dom::set_class(&button, "active", open));
            report("nav toggle", dom::set_class(&menu, "active", open));
        })?;
    }

    for link in dom::query_all_in(&links, "a") {
        let app = Rc::clone(app);
        let (button, menu) = (toggle.clone(), links.clone());
        dom::on(&link, "click", move |_| {
            if app.mobile_nav.borrow_mut().close() {
                report("nav close", dom::set_class(&button, "active", false));
                report("nav close", dom::set_class(&menu, "active", false));
            }
        })?;
    }

    Ok(())
}

fn bind_anchors(app: &Rc<App>) -> Result<()> {
    for anchor in dom::query_all(&app.document, r##"a[href^="#"]"##) {
        let app = Rc::clone(app);
        let href = anchor.get_attribute("href").unwrap_or_default();
        dom::on(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(id) = anchor_target(&href) {
                report("smooth scroll", scroll_to_section(&app, id));
            }
        })?;
    }

    // Manual scrolling takes over from a running animation.
    let window = app.window.clone();
    let app = Rc::clone(app);
    dom::on(&window, "wheel", move |_| {
        app.scroll_owner.borrow_mut().cancel();
    })
}

/// Start a smooth scroll to the element with `id`, leaving room for the header.
fn scroll_to_section(app: &Rc<App>, id: &str) -> Result<()> {
    let Some(target) = dom::by_id(&app.document, id) else {
        debug!(id, "Anchor target not found");
        return Ok(());
    };
    let scroll = &app.config.scroll;
    let to = dom::document_top(&app.window, &target)? - scroll.header_offset;
    let from = app.window.scroll_y()?;

    let ticket = app.scroll_owner.borrow_mut().begin();
    debug!(id, from, to, "Smooth scroll");
    next_frame(Rc::clone(app), ticket, ScrollAnimation::new(from, to, scroll.duration_ms))
}

/// Schedule one frame of `animation`. Each frame schedules the next until the
/// animation ends or a newer one supersedes it.
fn next_frame(app: Rc<App>, ticket: AnimationTicket, mut animation: ScrollAnimation) -> Result<()> {
    let window = app.window.clone();
    dom::request_frame(&window, move |now| {
        if !app.scroll_owner.borrow().is_current(ticket) {
            return;
        }
        let frame = animation.sample(now);
        app.window.scroll_to_with_x_and_y(0.0, frame.position);
        if frame.finished {
            app.scroll_owner.borrow_mut().finish(ticket);
        } else {
            report("smooth scroll", next_frame(app, ticket, animation));
        }
    })?;
    Ok(())
}

fn bind_scroll(app: &Rc<App>) -> Result<()> {
    let window = app.window.clone();
    let app = Rc::clone(app);
    dom::on(&window, "scroll", move |_| {
        if !app.frame_gate.borrow_mut().request() {
            return;
        }
        let frame_app = Rc::clone(&app);
        let scheduled = dom::request_frame(&app.window, move |_| {
            frame_app.frame_gate.borrow_mut().complete();
            report("scroll update", on_scroll_frame(&frame_app));
        });
        if let Err(e) = scheduled {
            app.frame_gate.borrow_mut().complete();
            report("scroll update", Err(e));
        }
    })
}

/// Parallax and active nav link for the current scroll offset.
fn on_scroll_frame(app: &App) -> Result<()> {
    let scroll_y = app.window.scroll_y()?;
    let config = &app.config.scroll;

    if let Some(hero) = dom::query(&app.document, ".hero")
        .and_then(|hero| hero.dyn_into::<HtmlElement>().ok())
    {
        hero.style().set_property(
            "transform",
            &parallax_transform(scroll_y, config.parallax_ratio),
        )?;
    }

    let mut sections = Vec::new();
    for section in dom::query_all(&app.document, "section[id]") {
        sections.push((section.id(), dom::document_top(&app.window, &section)?));
    }
    let current = active_section(
        sections.iter().map(|(id, top)| (id.as_str(), *top)),
        scroll_y,
        config.section_threshold,
    );

    for link in dom::query_all(&app.document, ".nav a") {
        let href = link.get_attribute("href").unwrap_or_default();
        let active = current.is_some_and(|id| links_to(&href, id));
        dom::set_class(&link, "active", active)?;
    }
    Ok(())
}
