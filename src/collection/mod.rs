pub mod view;

/// One work in the collection grid. The catalog ships with the app;
/// favorites refer to works by their `id`.
#[derive(Debug, Clone, Copy)]
pub struct CollectionItem {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

pub fn catalog() -> Vec<CollectionItem> {
    vec![
        CollectionItem {
            id: "umber-passage",
            title: "Umber Passage",
            category: "paintings",
        },
        CollectionItem {
            id: "tidewater-iv",
            title: "Tidewater IV",
            category: "paintings",
        },
        CollectionItem {
            id: "graphite-study-2",
            title: "Graphite Study No. 2",
            category: "works-on-paper",
        },
        CollectionItem {
            id: "ink-harbor",
            title: "Harbor, Ink Wash",
            category: "works-on-paper",
        },
        CollectionItem {
            id: "bronze-figure",
            title: "Seated Figure, Bronze",
            category: "sculpture",
        },
        CollectionItem {
            id: "steel-totem",
            title: "Totem in Weathered Steel",
            category: "sculpture",
        },
    ]
}

/// The distinct categories, in catalog order. Filter buttons are derived
/// from these.
pub fn categories(items: &[CollectionItem]) -> Vec<&'static str> {
    let mut categories = Vec::new();

    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }

    categories
}

#[derive(Debug, Clone)]
pub enum CollectionMessage {
    ToggleFavorite(String),
    FilterChanged(crate::state::Filter),
}

/// The visitor's favorites: a deduplicated set of work ids, backed by a
/// plain vector since membership checks only ever scan a handful of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Rebuilds the set from stored ids, dropping duplicates.
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut favorites = Self::default();

        for id in ids {
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }

        favorites
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Removes `id` if present, adds it otherwise.
    pub fn toggle(&mut self, id: &str) {
        match self.ids.iter().position(|fav| fav == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id.to_string()),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut favorites = Favorites::default();

        favorites.toggle("x");
        assert!(favorites.contains("x"));
        assert_eq!(favorites.ids(), ["x".to_string()]);

        favorites.toggle("x");
        assert!(favorites.is_empty());
    }

    #[test]
    fn toggle_leaves_other_ids_alone() {
        let mut favorites = Favorites::default();
        favorites.toggle("a");
        favorites.toggle("b");
        favorites.toggle("c");

        favorites.toggle("b");

        assert_eq!(favorites.ids(), ["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn stored_duplicates_are_dropped_on_load() {
        let favorites = Favorites::from_ids(vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]);

        assert_eq!(favorites.ids(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn categories_are_distinct_and_in_catalog_order() {
        let items = catalog();

        assert_eq!(
            categories(&items),
            vec!["paintings", "works-on-paper", "sculpture"]
        );
    }

    #[test]
    fn catalog_ids_are_unique() {
        let items = catalog();

        for (i, item) in items.iter().enumerate() {
            assert!(
                items[i + 1..].iter().all(|other| other.id != item.id),
                "duplicate id {}",
                item.id
            );
        }
    }
}
