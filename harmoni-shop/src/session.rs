//! A page session: shared catalog, owned cart and the active language.
use std::sync::Arc;

use crate::cart::{Cart, CartError, CartLine};
use crate::catalog::{Catalog, CatalogItem};
use crate::checkout::{CheckoutMessageBuilder, checkout_url};
use crate::config::ShopConfig;
use crate::format::CurrencyFormat;
use crate::lang::Language;
use crate::search::search_with_limit;

/// Authoritative state for one page session.
///
/// Cloning is cheap for the catalog (shared) and proportional to the cart.
/// UI code clones, mutates and stores the session back, then re-derives every
/// view from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopSession {
    catalog: Arc<Catalog>,
    cart: Cart,
    config: ShopConfig,
    language: Language,
}

impl Default for ShopSession {
    fn default() -> Self {
        Self::new(Catalog::empty(), ShopConfig::default(), Language::default())
    }
}

impl ShopSession {
    #[must_use]
    pub fn new(catalog: Catalog, config: ShopConfig, language: Language) -> Self {
        Self {
            catalog: Arc::new(catalog),
            cart: Cart::new(),
            config,
            language,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn get_all_products(&self) -> &[CatalogItem] {
        self.catalog.all_products()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    #[must_use]
    pub const fn config(&self) -> &ShopConfig {
        &self.config
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// See [`Cart::add_to_cart`].
    ///
    /// # Errors
    ///
    /// Propagates [`CartError`] for an empty name or zero price.
    pub fn add_to_cart(&mut self, name: &str, price: u64) -> Result<u32, CartError> {
        self.cart.add_to_cart(name, price)
    }

    /// # Errors
    ///
    /// Returns [`CartError::OutOfBounds`] for a stale index.
    pub fn increment_line(&mut self, index: usize) -> Result<u32, CartError> {
        self.cart.increment_line(index)
    }

    /// # Errors
    ///
    /// Returns [`CartError::OutOfBounds`] for a stale index.
    pub fn decrement_line(&mut self, index: usize) -> Result<u32, CartError> {
        self.cart.decrement_line(index)
    }

    /// # Errors
    ///
    /// Returns [`CartError::OutOfBounds`] for a stale index.
    pub fn remove_line(&mut self, index: usize) -> Result<CartLine, CartError> {
        self.cart.remove_line(index)
    }

    /// # Errors
    ///
    /// Returns [`CartError::UnknownLine`] if the product is not in the cart.
    pub fn increment(&mut self, name: &str) -> Result<u32, CartError> {
        self.cart.increment(name)
    }

    /// # Errors
    ///
    /// Returns [`CartError::UnknownLine`] if the product is not in the cart.
    pub fn decrement(&mut self, name: &str) -> Result<u32, CartError> {
        self.cart.decrement(name)
    }

    /// # Errors
    ///
    /// Returns [`CartError::UnknownLine`] if the product is not in the cart.
    pub fn remove(&mut self, name: &str) -> Result<CartLine, CartError> {
        self.cart.remove(name)
    }

    #[must_use]
    pub fn get_total(&self) -> u64 {
        self.cart.total()
    }

    #[must_use]
    pub fn get_count(&self) -> u64 {
        self.cart.count()
    }

    /// Empty the cart, keeping catalog, config and language.
    pub fn reset(&mut self) {
        self.cart.clear();
    }

    /// Catalog matches for `query`, capped at the configured limit.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        search_with_limit(&self.catalog, query, self.config.search_limit)
    }

    #[must_use]
    pub fn currency(&self) -> CurrencyFormat {
        self.config.currency()
    }

    #[must_use]
    pub fn format_currency(&self, amount: u64) -> String {
        self.currency().format(amount)
    }

    /// Encoded checkout message for the current cart and language.
    #[must_use]
    pub fn checkout_message(&self) -> String {
        CheckoutMessageBuilder::new(self.config.business_name.clone(), self.currency()).build(
            self.cart.lines(),
            self.cart.total(),
            self.language,
        )
    }

    /// Tap-to-send `wa.me` link for the current cart.
    #[must_use]
    pub fn checkout_url(&self) -> String {
        checkout_url(&self.config.whatsapp_phone, &self.checkout_message())
    }
}
