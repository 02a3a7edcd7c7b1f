use crate::collection::{CollectionItem, Favorites};

/// Which works the collection grid shows. Exactly one filter is active at a
/// time; it lives here rather than being read back off the buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    Category(String),
}

impl Filter {
    pub fn matches(&self, item: &CollectionItem, favorites: &Favorites) -> bool {
        match self {
            Filter::All => true,
            Filter::Favorites => favorites.contains(item.id),
            Filter::Category(category) => item.category == category.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::catalog;

    #[test]
    fn all_shows_every_item() {
        let items = catalog();
        let favorites = Favorites::default();

        assert!(items
            .iter()
            .all(|item| Filter::All.matches(item, &favorites)));
    }

    #[test]
    fn favorites_shows_exactly_the_favorited_ids() {
        let items = catalog();
        let mut favorites = Favorites::default();
        favorites.toggle("umber-passage");
        favorites.toggle("steel-totem");

        let shown: Vec<&str> = items
            .iter()
            .filter(|item| Filter::Favorites.matches(item, &favorites))
            .map(|item| item.id)
            .collect();

        // Membership decides, category does not.
        assert_eq!(shown, vec!["umber-passage", "steel-totem"]);
    }

    #[test]
    fn category_matches_the_item_category_only() {
        let items = catalog();
        let favorites = Favorites::default();
        let filter = Filter::Category("sculpture".to_string());

        let shown: Vec<&str> = items
            .iter()
            .filter(|item| filter.matches(item, &favorites))
            .map(|item| item.id)
            .collect();

        assert_eq!(shown, vec!["bronze-figure", "steel-totem"]);
    }

    #[test]
    fn unknown_category_shows_nothing() {
        let items = catalog();
        let favorites = Favorites::default();
        let filter = Filter::Category("tapestry".to_string());

        assert!(!items.iter().any(|item| filter.matches(item, &favorites)));
    }
}
