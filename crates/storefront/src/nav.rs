//! Navigation state: the mobile menu and nav link matching.

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu, returning the new state.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns whether it was open.
    pub const fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

/// The fragment an in-page link points at (`"#about"` -> `"about"`).
///
/// Returns `None` for external links and the bare `"#"`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a nav link with `href` belongs to the section `section_id`.
#[must_use]
pub fn links_to(href: &str, section_id: &str) -> bool {
    anchor_target(href) == Some(section_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut nav = MobileNav::new();
        assert!(!nav.is_open());
        assert!(nav.toggle());
        assert!(nav.is_open());
        assert!(nav.close());
        assert!(!nav.close());
        assert!(!nav.is_open());
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#products"), Some("products"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
    }

    #[test]
    fn test_links_to() {
        assert!(links_to("#about", "about"));
        assert!(!links_to("#about", "products"));
        assert!(!links_to("about", "about"));
    }
}
