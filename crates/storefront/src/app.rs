//! Page-wide application state shared by every event handler.

use std::cell::RefCell;
use std::rc::Rc;

use textile_core::Catalog;
use tracing::warn;
use web_sys::{Document, Window};

use crate::cart::CartStore;
use crate::catalog::CatalogView;
use crate::config::StorefrontConfig;
use crate::dom::notify::DomNotifier;
use crate::nav::MobileNav;
use crate::scroll::{AnimationOwner, FrameGate};
use crate::storage::{KeyValueStore, LocalStorage, MemoryStore};
use crate::theme::ThemeController;

/// Storage shared by the cart and the theme.
pub type SharedStore = Rc<dyn KeyValueStore>;

/// Everything the handlers read or mutate.
///
/// Handlers run one at a time on the UI thread. Each `RefCell` borrow is
/// released before a handler touches the DOM or calls into another handler.
#[derive(Debug)]
pub struct App {
    pub config: StorefrontConfig,
    pub window: Window,
    pub document: Document,
    pub catalog: Catalog,
    pub cart: RefCell<CartStore<SharedStore>>,
    pub theme: RefCell<ThemeController<SharedStore>>,
    pub catalog_view: RefCell<CatalogView>,
    pub mobile_nav: RefCell<MobileNav>,
    pub scroll_owner: RefCell<AnimationOwner>,
    pub frame_gate: RefCell<FrameGate>,
    pub notifier: DomNotifier,
}

impl App {
    /// Load persisted state and build the app.
    ///
    /// Falls back to in-memory storage when `localStorage` is unavailable, so
    /// the cart still works for the current page view.
    #[must_use]
    pub fn new(config: StorefrontConfig, window: Window, document: Document) -> Rc<Self> {
        let storage: SharedStore = match LocalStorage::open() {
            Ok(local) => Rc::new(local),
            Err(e) => {
                warn!(error = %e, "localStorage unavailable, cart will not persist");
                Rc::new(MemoryStore::new())
            }
        };

        let cart = CartStore::load(Rc::clone(&storage), config.storage.cart.clone());
        let theme = ThemeController::load(storage, config.storage.theme.clone());
        let notifier = DomNotifier::new(window.clone(), document.clone(), config.notifications);

        Rc::new(Self {
            config,
            window,
            document,
            catalog: Catalog::builtin(),
            cart: RefCell::new(cart),
            theme: RefCell::new(theme),
            catalog_view: RefCell::new(CatalogView::new()),
            mobile_nav: RefCell::new(MobileNav::new()),
            scroll_owner: RefCell::new(AnimationOwner::new()),
            frame_gate: RefCell::new(FrameGate::new()),
            notifier,
        })
    }
}

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Register the running app for the JavaScript exports.
pub fn install(app: &Rc<App>) {
    APP.with(|slot| *slot.borrow_mut() = Some(Rc::clone(app)));
}

/// The running app, `None` before bootstrap finished.
#[must_use]
pub fn current() -> Option<Rc<App>> {
    APP.with(|slot| slot.borrow().clone())
}
