//! Product card visibility: fabric filter plus free-text search.
//!
//! Both selections live in one [`CatalogView`]. A card is shown only when it
//! passes the fabric filter and the search query, so typing a query after
//! picking a fabric never brings back cards of other fabrics.

use textile_core::{Fabric, FabricFilter};

/// What a product card exposes for filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardInfo {
    /// `data-fabric` tag; `None` when missing or empty
    pub fabric: Option<Fabric>,
    pub title: String,
    pub description: String,
}

impl CardInfo {
    /// Build card info from raw attribute and text values.
    #[must_use]
    pub fn new(fabric_tag: Option<&str>, title: &str, description: &str) -> Self {
        Self {
            fabric: fabric_tag.and_then(|tag| tag.parse().ok()),
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Current filter and search selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    filter: FabricFilter,
    /// Lowercased search text, empty when not searching
    query: String,
}

impl CatalogView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn filter(&self) -> &FabricFilter {
        &self.filter
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a fabric filter. Returns whether the selection changed.
    pub fn set_filter(&mut self, filter: FabricFilter) -> bool {
        let changed = self.filter != filter;
        self.filter = filter;
        changed
    }

    /// Set the search text. Matching ignores case.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    #[must_use]
    pub fn passes_filter(&self, card: &CardInfo) -> bool {
        self.filter.matches(card.fabric.as_ref())
    }

    /// Whether the title or description contains the query.
    #[must_use]
    pub fn passes_search(&self, card: &CardInfo) -> bool {
        self.query.is_empty()
            || card.title.to_lowercase().contains(&self.query)
            || card.description.to_lowercase().contains(&self.query)
    }

    #[must_use]
    pub fn is_visible(&self, card: &CardInfo) -> bool {
        self.passes_filter(card) && self.passes_search(card)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cards() -> Vec<CardInfo> {
        vec![
            CardInfo::new(
                Some("cotton"),
                "Cotton Summer Dress",
                "Comfortable and breathable cotton dress perfect for summer days.",
            ),
            CardInfo::new(
                Some("silk"),
                "Silk Evening Gown",
                "Elegant silk gown for special occasions.",
            ),
            CardInfo::new(
                Some("linen"),
                "Linen Casual Shirt",
                "Sustainable linen shirt with natural texture.",
            ),
            CardInfo::new(Some("hemp"), "Hemp Tote", "Sturdy bag, cotton lined."),
        ]
    }

    fn visible_titles(view: &CatalogView) -> Vec<String> {
        cards()
            .into_iter()
            .filter(|c| view.is_visible(c))
            .map(|c| c.title)
            .collect()
    }

    #[test]
    fn test_default_shows_everything() {
        let view = CatalogView::new();
        assert_eq!(view.filter(), &FabricFilter::All);
        assert_eq!(visible_titles(&view).len(), 4);
    }

    #[test]
    fn test_silk_filter() {
        let mut view = CatalogView::new();
        assert!(view.set_filter(FabricFilter::Only(Fabric::Silk)));
        assert_eq!(visible_titles(&view), vec!["Silk Evening Gown"]);

        assert!(!view.set_filter(FabricFilter::Only(Fabric::Silk)));
        assert!(view.set_filter(FabricFilter::All));
        assert_eq!(visible_titles(&view).len(), 4);
    }

    #[test]
    fn test_unlisted_fabric_tag_filters_exactly() {
        let mut view = CatalogView::new();
        view.set_filter("hemp".parse().unwrap());
        assert_eq!(visible_titles(&view), vec!["Hemp Tote"]);

        // Tags compare case-sensitively
        view.set_filter("Hemp".parse().unwrap());
        assert!(visible_titles(&view).is_empty());

        view.set_filter(FabricFilter::Only(Fabric::Cotton));
        assert_eq!(visible_titles(&view), vec!["Cotton Summer Dress"]);
    }

    #[test]
    fn test_untagged_card_only_visible_under_all() {
        let gift = CardInfo::new(None, "Gift Card", "");
        assert_eq!(gift.fabric, None);
        assert_eq!(CardInfo::new(Some(""), "Gift Card", "").fabric, None);

        let mut view = CatalogView::new();
        assert!(view.is_visible(&gift));
        view.set_filter(FabricFilter::Only(Fabric::Cotton));
        assert!(!view.is_visible(&gift));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let mut view = CatalogView::new();
        view.set_query("COTTON");
        assert_eq!(
            visible_titles(&view),
            vec!["Cotton Summer Dress", "Hemp Tote"]
        );

        view.set_query("natural");
        assert_eq!(visible_titles(&view), vec!["Linen Casual Shirt"]);

        view.set_query("velvet");
        assert!(visible_titles(&view).is_empty());
    }

    #[test]
    fn test_filter_and_search_combine() {
        let mut view = CatalogView::new();
        view.set_filter(FabricFilter::Only(Fabric::Cotton));
        view.set_query("cotton");
        // The hemp tote mentions cotton but fails the fabric filter
        assert_eq!(visible_titles(&view), vec!["Cotton Summer Dress"]);

        view.set_query("");
        view.set_filter(FabricFilter::Only(Fabric::Linen));
        assert_eq!(visible_titles(&view), vec!["Linen Casual Shirt"]);
    }
}
