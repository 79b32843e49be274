//! Cart badge, modal and item list.

use std::rc::Rc;

use textile_core::ProductId;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlImageElement};

use crate::app::App;
use crate::cart::{CartChange, CartItemView, CartView};
use crate::dom;
use crate::error::{Result, StorefrontError, report};
use crate::notify::{NotificationKind, Notifier};

pub const ADDED_MESSAGE: &str = "Product added to cart!";

/// Wire the cart icon, modal, item list and add-to-cart buttons.
pub fn bind(app: &Rc<App>) -> Result<()> {
    let document = &app.document;
    let modal = dom::by_id(document, "cart-modal");

    if let (Some(icon), Some(modal)) = (dom::by_id(document, "cart-icon"), modal.clone()) {
        let app = Rc::clone(app);
        dom::on(&icon, "click", move |_| {
            report("open cart", open(&app, &modal));
        })?;
    }

    if let Some(modal) = modal {
        if let Some(close) = dom::query(document, ".cart-close") {
            let modal = modal.clone();
            dom::on(&close, "click", move |_| {
                report("close cart", dom::set_class(&modal, "active", false));
            })?;
        }

        let backdrop = modal.clone();
        dom::on(&modal, "click", move |event| {
            if is_target(&event, &backdrop) {
                report("close cart", dom::set_class(&backdrop, "active", false));
            }
        })?;
    }

    if let Some(items) = dom::by_id(document, "cart-items") {
        let app = Rc::clone(app);
        dom::on(&items, "click", move |event| on_item_action(&app, &event))?;
    }

    for button in dom::query_all(document, ".add-to-cart[data-product-id]") {
        let app = Rc::clone(app);
        let id = button.get_attribute("data-product-id");
        dom::on(&button, "click", move |_| {
            match id.as_deref().map(str::parse::<ProductId>) {
                Some(Ok(id)) => add_product(&app, id),
                _ => warn!(id = ?id, "Add-to-cart button without a valid product id"),
            }
        })?;
    }

    refresh(app)
}

/// Redraw the badge and the item list from the current cart.
pub fn refresh(app: &App) -> Result<()> {
    let view = CartView::from(app.cart.borrow().cart());
    update_badge(&app.document, &view)?;
    render(&app.document, &view)
}

/// Add a catalog product and confirm it. Unknown ids are ignored.
pub fn add_product(app: &App, id: ProductId) {
    let added = app.cart.borrow_mut().add_by_id(&app.catalog, id);
    if added.is_some() {
        report("cart refresh", refresh(app));
        app.notifier.notify(ADDED_MESSAGE, NotificationKind::Success);
    }
}

/// Change a line's quantity by `delta`.
pub fn adjust_quantity(app: &App, id: ProductId, delta: i32) {
    let change = app.cart.borrow_mut().set_quantity(id, delta);
    if change != CartChange::Unchanged {
        report("cart refresh", refresh(app));
    }
}

/// Drop a line.
pub fn remove_product(app: &App, id: ProductId) {
    app.cart.borrow_mut().remove(id);
    report("cart refresh", refresh(app));
}

fn open(app: &App, modal: &Element) -> Result<()> {
    dom::set_class(modal, "active", true)?;
    refresh(app)
}

/// Whether the event hit `element` itself rather than one of its children.
fn is_target(event: &Event, element: &Element) -> bool {
    event.target().is_some_and(|target| {
        let target: &JsValue = target.as_ref();
        let element: &JsValue = element.as_ref();
        target == element
    })
}

/// Delegated handler for the buttons rendered into `#cart-items`.
fn on_item_action(app: &App, event: &Event) {
    let Some(button) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|target| target.closest("[data-action]").ok().flatten())
    else {
        return;
    };

    let id = button
        .get_attribute("data-product-id")
        .and_then(|id| id.parse::<ProductId>().ok());
    let Some(id) = id else {
        return;
    };

    match button.get_attribute("data-action").as_deref() {
        Some("increment") => adjust_quantity(app, id, 1),
        Some("decrement") => adjust_quantity(app, id, -1),
        Some("remove") => remove_product(app, id),
        other => debug!(action = ?other, "Unknown cart action"),
    }
}

fn update_badge(document: &Document, view: &CartView) -> Result<()> {
    let Some(badge) = dom::by_id(document, "cart-count") else {
        return Ok(());
    };
    match view.badge() {
        Some(count) => {
            badge.set_text_content(Some(&count));
            dom::set_visible(&badge, true)
        }
        None => {
            badge.set_text_content(Some("0"));
            dom::set_visible(&badge, false)
        }
    }
}

fn render(document: &Document, view: &CartView) -> Result<()> {
    let (Some(items), Some(total)) = (
        dom::by_id(document, "cart-items"),
        dom::by_id(document, "cart-total"),
    ) else {
        return Ok(());
    };

    items.set_text_content(None);
    total.set_text_content(Some(&view.total));

    if view.is_empty() {
        let placeholder =
            dom::create(document, "p", Some("empty-cart"), Some(CartView::EMPTY_MESSAGE))?;
        items.append_child(&placeholder)?;
        return Ok(());
    }

    for item in &view.items {
        let row = render_item(document, item)?;
        items.append_child(&row)?;
    }
    Ok(())
}

/// ```html
/// <div class="cart-item">
///   <img src="…" alt="…">
///   <div class="cart-item-details">
///     <h4>Name</h4>
///     <p>$89.99</p>
///     <div class="quantity-controls">
///       <button data-action="decrement">-</button>
///       <span>2</span>
///       <button data-action="increment">+</button>
///     </div>
///   </div>
///   <button class="remove-item" data-action="remove">×</button>
/// </div>
/// ```
fn render_item(document: &Document, item: &CartItemView) -> Result<Element> {
    let row = dom::create(document, "div", Some("cart-item"), None)?;
    let id = item.id.to_string();

    let image = document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| StorefrontError::Dom("img is not an image".into()))?;
    image.set_src(&item.image);
    image.set_alt(&item.name);
    row.append_child(&image)?;

    let details = dom::create(document, "div", Some("cart-item-details"), None)?;
    let name = dom::create(document, "h4", None, Some(&item.name))?;
    let price = dom::create(document, "p", None, Some(&item.price))?;
    details.append_child(&name)?;
    details.append_child(&price)?;

    let controls = dom::create(document, "div", Some("quantity-controls"), None)?;
    let decrement = action_button(document, None, "decrement", &id, "-")?;
    let quantity = dom::create(document, "span", None, Some(&item.quantity.to_string()))?;
    let increment = action_button(document, None, "increment", &id, "+")?;
    controls.append_child(&decrement)?;
    controls.append_child(&quantity)?;
    controls.append_child(&increment)?;
    details.append_child(&controls)?;
    row.append_child(&details)?;

    let remove = action_button(document, Some("remove-item"), "remove", &id, "\u{00d7}")?;
    row.append_child(&remove)?;
    Ok(row)
}

fn action_button(
    document: &Document,
    class: Option<&str>,
    action: &str,
    id: &str,
    label: &str,
) -> Result<Element> {
    let button = dom::create(document, "button", class, Some(label))?;
    button.set_attribute("data-action", action)?;
    button.set_attribute("data-product-id", id)?;
    Ok(button)
}
