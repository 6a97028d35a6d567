mod cart;
mod prefs;
mod search;

use crate::app::state::AppState;
use crate::shop::Language;
use yew::prelude::*;

pub use cart::{
    build_add, build_close_cart, build_decrement, build_increment, build_open_cart, build_remove,
};
pub use prefs::build_lang_change;
pub use search::{build_close_search, build_open_search, build_query};

#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub add: Callback<(String, u64)>,
    pub increment: Callback<String>,
    pub decrement: Callback<String>,
    pub remove: Callback<String>,
    pub open_cart: Callback<()>,
    pub close_cart: Callback<()>,
    pub query: Callback<String>,
    pub open_search: Callback<()>,
    pub close_search: Callback<()>,
    pub lang_change: Callback<Language>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        let dispatcher = state.model.dispatcher();
        let config = state.model.session.config().clone();
        Self {
            add: build_add(&dispatcher),
            increment: build_increment(&dispatcher),
            decrement: build_decrement(&dispatcher),
            remove: build_remove(&dispatcher),
            open_cart: build_open_cart(&dispatcher),
            close_cart: build_close_cart(&dispatcher),
            query: build_query(&dispatcher),
            open_search: build_open_search(&dispatcher),
            close_search: build_close_search(&dispatcher),
            lang_change: build_lang_change(&dispatcher, config),
        }
    }
}
