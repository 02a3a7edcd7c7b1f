pub mod filter;
pub mod persistence;

use crate::collection::{catalog, CollectionItem, Favorites};
use crate::contact::{ContactForm, Submission};
use crate::gallery::Gallery;

pub use filter::Filter;
use persistence::Store;

#[derive(Debug)]
pub struct State {
    pub gallery: Gallery,
    pub items: Vec<CollectionItem>,
    pub favorites: Favorites,
    pub filter: Filter,
    pub form: ContactForm,
    pub submissions: Vec<Submission>,
    pub store: Store,
    pub saving: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            gallery: Gallery::featured(),
            items: catalog(),
            favorites: Favorites::default(),
            filter: Filter::default(),
            form: ContactForm::default(),
            submissions: Vec::new(),
            store: Store::new(),
            saving: 0,
        }
    }
}
