//! Browser implementations of the storefront traits
//!
//! This module provides web-specific implementations of the harmoni-shop
//! traits and re-exports the core shop types.

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use web_sys::Element;

use crate::dom;

// Re-export all types from harmoni-shop
pub use harmoni_shop::*;

/// Product card selector scanned for the catalog.
pub const CARD_SELECTOR: &str = ".collection-card";
const CARD_IMAGE_SELECTOR: &str = ".card-image img";
const CARD_PRICE_SELECTOR: &str = ".card-price";

/// Builds the catalog from product cards in the current document.
pub struct DomCatalogLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebLoadError {
    #[error("Unknown config: {0}")]
    UnknownConfig(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read one card's raw attributes.
#[must_use]
pub fn read_card(card: &Element) -> RawCard {
    let image = card
        .query_selector(CARD_IMAGE_SELECTOR)
        .ok()
        .flatten()
        .and_then(|img| img.get_attribute("src"));
    RawCard {
        name: card.get_attribute("data-name"),
        price: card.get_attribute("data-price"),
        image,
    }
}

impl ShopLoader for DomCatalogLoader {
    type Error = WebLoadError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        let cards = dom::query_all(CARD_SELECTOR);
        Ok(Catalog::from_cards(cards.iter().map(read_card)))
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let json = match config_name {
            "shop" => include_str!("../static/config.json"),
            _ => return Err(WebLoadError::UnknownConfig(config_name.to_string())),
        };
        serde_json::from_str(json).map_err(WebLoadError::Json)
    }
}

/// Language preference kept in `localStorage`.
pub struct WebPreferenceStorage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("Storage error: {0}")]
    Storage(String),
}

fn ensure_browser() -> Result<(), WebStorageError> {
    dom::window().map(|_| ()).ok_or(WebStorageError::Unavailable)
}

impl PreferenceStorage for WebPreferenceStorage {
    type Error = WebStorageError;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        ensure_browser()?;
        match LocalStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(err)) => {
                log::warn!("ignoring unreadable preference {key}: {err}");
                Ok(None)
            }
            Err(err) => Err(WebStorageError::Storage(err.to_string())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        ensure_browser()?;
        LocalStorage::set(key, value).map_err(|e| WebStorageError::Storage(e.to_string()))
    }
}

/// Engine type used by the page.
pub type WebShopEngine = ShopEngine<DomCatalogLoader, WebPreferenceStorage>;

#[must_use]
pub const fn web_engine() -> WebShopEngine {
    ShopEngine::new(DomCatalogLoader, WebPreferenceStorage)
}

/// Shop config embedded at build time, or defaults if it fails to parse.
#[must_use]
pub fn web_config() -> ShopConfig {
    DomCatalogLoader.load_config("shop").unwrap_or_else(|err| {
        log::warn!("falling back to default shop config: {err}");
        ShopConfig::default()
    })
}

/// Replace each card's visible price with its formatted `data-price`.
pub fn sync_card_prices(currency: &CurrencyFormat) {
    for card in dom::query_all(CARD_SELECTOR) {
        let price = card
            .get_attribute("data-price")
            .map_or(0, |raw| numbers::coerce_price(&raw));
        if let Ok(Some(price_el)) = card.query_selector(CARD_PRICE_SELECTOR) {
            price_el.set_text_content(Some(&currency.format(price)));
        }
    }
}
