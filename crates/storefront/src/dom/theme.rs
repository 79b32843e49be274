//! `data-theme` on `<body>` and the theme toggle button.

use std::rc::Rc;

use tracing::info;

use crate::app::App;
use crate::dom;
use crate::error::{Result, report};
use crate::theme::Theme;

pub fn bind(app: &Rc<App>) -> Result<()> {
    apply(app, app.theme.borrow().current())?;

    if let Some(toggle) = dom::by_id(&app.document, "theme-toggle") {
        let app = Rc::clone(app);
        dom::on(&toggle, "click", move |_| {
            let theme = app.theme.borrow_mut().toggle(&app.notifier);
            info!(%theme, "Theme switched");
            report("theme", apply(&app, theme));
        })?;
    }
    Ok(())
}

fn apply(app: &App, theme: Theme) -> Result<()> {
    dom::body(&app.document)?.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}
