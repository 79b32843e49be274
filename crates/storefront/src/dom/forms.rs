//! Submit handling for every `<form>` on the page.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::app::App;
use crate::dom;
use crate::error::{Result, report};
use crate::forms::{ContactSubmission, FormOutcome, handle_submission};
use crate::notify::Notifier;

/// Fields read from a submitted form.
const FIELDS: [&str; 2] = ["email", "phone"];

pub fn bind(app: &Rc<App>) -> Result<()> {
    for form in dom::query_all(&app.document, "form") {
        let Ok(form) = form.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let app = Rc::clone(app);
        let target = form.clone();
        dom::on(&form, "submit", move |event| {
            event.prevent_default();
            report("form submit", submit(&target, &app.notifier));
        })?;
    }
    Ok(())
}

fn submit(form: &HtmlFormElement, notifier: &dyn Notifier) -> Result<()> {
    let data = FormData::new_with_form(form)?;
    let submission = ContactSubmission::from_fields(
        FIELDS
            .iter()
            .filter_map(|&name| data.get(name).as_string().map(|value| (name, value))),
    );

    if handle_submission(&submission, notifier) == FormOutcome::Accepted {
        form.reset();
    }
    Ok(())
}
