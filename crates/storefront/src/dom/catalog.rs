//! Fabric filter buttons and the search box.

use std::rc::Rc;

use textile_core::FabricFilter;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::app::App;
use crate::catalog::{CardInfo, CatalogView};
use crate::dom;
use crate::error::{Result, report};

const CARD_SELECTOR: &str = ".product-card";

pub fn bind(app: &Rc<App>) -> Result<()> {
    let buttons = dom::query_all(&app.document, ".filter-btn");
    for button in &buttons {
        let app = Rc::clone(app);
        let all = buttons.clone();
        let clicked = button.clone();
        dom::on(button, "click", move |_| {
            report("filter", select_filter(&app, &all, &clicked));
        })?;
    }

    if let Some(input) = dom::by_id(&app.document, "search-input") {
        let app = Rc::clone(app);
        let field = input.clone();
        dom::on(&input, "input", move |_| {
            let query = field
                .dyn_ref::<HtmlInputElement>()
                .map(HtmlInputElement::value)
                .unwrap_or_default();
            app.catalog_view.borrow_mut().set_query(&query);
            report("search", apply(&app));
        })?;
    }

    Ok(())
}

fn select_filter(app: &App, buttons: &[Element], clicked: &Element) -> Result<()> {
    let tag = clicked.get_attribute("data-filter");
    let filter = match tag.as_deref().map(str::parse::<FabricFilter>) {
        Some(Ok(filter)) => filter,
        Some(Err(e)) => {
            warn!(error = %e, "Ignoring filter button");
            return Ok(());
        }
        None => FabricFilter::All,
    };

    set_active(buttons, clicked)?;

    let label = filter.to_string();
    if app.catalog_view.borrow_mut().set_filter(filter) {
        debug!(filter = %label, "Filter changed");
    }
    apply(app)
}

/// Mark `clicked` as the only active filter button.
fn set_active(buttons: &[Element], clicked: &Element) -> Result<()> {
    for button in buttons {
        dom::set_class(button, "active", button == clicked)?;
    }
    Ok(())
}

/// Show the cards that pass both the filter and the search.
fn apply(app: &App) -> Result<()> {
    let view = app.catalog_view.borrow().clone();
    show_matching(&app.document, &view)
}

fn show_matching(document: &Document, view: &CatalogView) -> Result<()> {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let visible = view.is_visible(&card_info(&card));
        dom::set_visible(&card, visible)?;
        dom::set_class(&card, "animate-in", visible)?;
    }
    Ok(())
}

fn card_info(card: &Element) -> CardInfo {
    CardInfo::new(
        card.get_attribute("data-fabric").as_deref(),
        &dom::text_of(card, ".product-title"),
        &dom::text_of(card, ".product-description"),
    )
}
