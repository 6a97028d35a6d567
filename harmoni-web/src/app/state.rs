use crate::shop::{CartError, Language, ShopSession};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

/// Everything the page renders from: the shop session plus panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShopModel {
    pub session: ShopSession,
    pub query: String,
    pub cart_open: bool,
    pub search_open: bool,
}

/// User intents routed through the reducer. Cart lines are addressed by
/// product name so an action never targets a shifted position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopAction {
    Add { name: String, price: u64 },
    Increment(String),
    Decrement(String),
    Remove(String),
    Query(String),
    OpenCart,
    CloseCart,
    OpenSearch,
    CloseSearch,
    SetLanguage(Language),
}

impl ShopModel {
    #[must_use]
    pub fn new(session: ShopSession) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    /// Apply one action in place.
    ///
    /// Returns what to announce to screen readers, if anything.
    ///
    /// # Errors
    ///
    /// Returns the cart's refusal; the model is left unchanged in that case.
    pub fn apply(&mut self, action: ShopAction) -> Result<Option<Notice>, CartError> {
        let notice = match action {
            ShopAction::Add { name, price } => {
                self.session.add_to_cart(&name, price)?;
                self.cart_open = true;
                Some(Notice::new("cart.added", name))
            }
            ShopAction::Increment(name) => {
                self.session.increment(&name)?;
                None
            }
            ShopAction::Decrement(name) => {
                self.session.decrement(&name)?;
                None
            }
            ShopAction::Remove(name) => {
                self.session.remove(&name)?;
                Some(Notice::new("cart.removed", name))
            }
            ShopAction::Query(query) => {
                self.query = query;
                None
            }
            ShopAction::OpenCart => {
                self.cart_open = true;
                None
            }
            ShopAction::CloseCart => {
                self.cart_open = false;
                None
            }
            ShopAction::OpenSearch => {
                self.search_open = true;
                None
            }
            ShopAction::CloseSearch => {
                self.search_open = false;
                self.query.clear();
                None
            }
            ShopAction::SetLanguage(lang) => {
                self.session.set_language(lang);
                None
            }
        };
        Ok(notice)
    }
}

/// A live-region message for a cart change that went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub key: &'static str,
    pub item: String,
}

impl Notice {
    fn new(key: &'static str, item: String) -> Self {
        Self { key, item }
    }

    #[must_use]
    pub fn text(&self) -> String {
        let mut vars = BTreeMap::new();
        vars.insert("item", self.item.as_str());
        crate::i18n::tr(self.key, Some(&vars))
    }
}

impl Reducible for ShopModel {
    type Action = ShopAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(notice) => {
                if let Some(notice) = notice {
                    crate::a11y::set_status(&notice.text());
                }
                Rc::new(next)
            }
            Err(err) => {
                log::warn!("cart action ignored: {err}");
                self
            }
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub model: UseReducerHandle<ShopModel>,
}

#[hook]
pub fn use_app_state(session: ShopSession) -> AppState {
    AppState {
        model: use_reducer(move || ShopModel::new(session)),
    }
}
