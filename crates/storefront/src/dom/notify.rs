//! Toast notifications appended to `<body>`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::config::NotificationConfig;
use crate::dom;
use crate::error::{Result, report};
use crate::notify::{NotificationKind, Notifier};

/// Shows each notification as its own element:
///
/// ```html
/// <div class="notification notification-success">
///   <span>Product added to cart!</span>
///   <button class="notification-close">×</button>
/// </div>
/// ```
#[derive(Debug, Clone)]
pub struct DomNotifier {
    window: Window,
    document: Document,
    timings: NotificationConfig,
}

impl DomNotifier {
    #[must_use]
    pub const fn new(window: Window, document: Document, timings: NotificationConfig) -> Self {
        Self {
            window,
            document,
            timings,
        }
    }

    /// Dismiss notifications from their close buttons. One document-level
    /// listener serves every notification.
    pub fn bind(&self) -> Result<()> {
        let window = self.window.clone();
        let exit_ms = self.timings.exit_ms;
        dom::on(&self.document, "click", move |event| {
            if let Some(element) = closed_notification(&event) {
                report("notification close", dismiss(&window, &element, exit_ms));
            }
        })
    }

    fn show(&self, message: &str, kind: NotificationKind) -> Result<()> {
        let element = dom::create(&self.document, "div", Some(&kind.class_name()), None)?;
        let text = dom::create(&self.document, "span", None, Some(message))?;
        let close = dom::create(
            &self.document,
            "button",
            Some("notification-close"),
            Some("\u{00d7}"),
        )?;
        element.append_child(&text)?;
        element.append_child(&close)?;
        dom::body(&self.document)?.append_child(&element)?;

        let entering = element.clone();
        dom::set_timeout(&self.window, self.timings.enter_delay_ms, move || {
            report("notification enter", dom::set_class(&entering, "show", true));
        })?;

        let window = self.window.clone();
        let exit_ms = self.timings.exit_ms;
        dom::set_timeout(&self.window, self.timings.dismiss_after_ms, move || {
            report("notification dismiss", dismiss(&window, &element, exit_ms));
        })?;

        Ok(())
    }
}

/// The notification whose close button was clicked, if any.
fn closed_notification(event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let close = target.closest(".notification-close").ok().flatten()?;
    close.closest(".notification").ok().flatten()
}

/// Drop `show`, then remove the element once the exit transition is done.
///
/// Safe to call twice: removing a detached element is a no-op.
fn dismiss(window: &Window, element: &Element, exit_ms: i32) -> Result<()> {
    dom::set_class(element, "show", false)?;
    let element = element.clone();
    dom::set_timeout(window, exit_ms, move || element.remove())?;
    Ok(())
}

impl Notifier for DomNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        report("notification", self.show(message, kind));
    }
}
