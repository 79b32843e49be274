//! Page startup: configuration, tracing, state and event wiring.

use std::rc::Rc;

use tracing::{info, warn};
use web_sys::{Document, Window};

use crate::app::{self, App};
use crate::config::StorefrontConfig;
use crate::dom;
use crate::error::{Result, report};
use crate::telemetry;

/// Start the storefront once the DOM is ready.
///
/// # Errors
///
/// Returns an error when there is no `window`/`document` or the
/// `DOMContentLoaded` listener cannot be attached.
pub fn start() -> Result<()> {
    let window = dom::window()?;
    let document = dom::document()?;

    if document.ready_state() == "loading" {
        let mut pending = Some((window, document.clone()));
        dom::on(&document, "DOMContentLoaded", move |_| {
            if let Some((window, document)) = pending.take() {
                report("startup", run(window, document));
            }
        })
    } else {
        run(window, document)
    }
}

fn run(window: Window, document: Document) -> Result<()> {
    let body = dom::body(&document)?;
    let (config, config_error) =
        match StorefrontConfig::from_attributes(|name| body.get_attribute(name)) {
            Ok(config) => (config, None),
            Err(e) => (StorefrontConfig::default(), Some(e)),
        };

    telemetry::init(&config.log_filter);
    if let Some(e) = config_error {
        warn!(error = %e, "Invalid page configuration, using defaults");
    }

    let app = App::new(config, window, document);
    app::install(&app);

    bind_all(&app);
    info!(
        cart_items = app.cart.borrow().total_items(),
        theme = %app.theme.borrow().current(),
        "Storefront initialized"
    );
    Ok(())
}

/// Wire every feature. One failing binder does not stop the others.
fn bind_all(app: &Rc<App>) {
    report("notifications", app.notifier.bind());
    report("theme", dom::theme::bind(app));
    report("cart", dom::cart::bind(app));
    report("catalog", dom::catalog::bind(app));
    report("navigation", dom::nav::bind(app));
    report("forms", dom::forms::bind(app));
    report("reveal", dom::reveal::bind(app));
}
