//! Harmoni Storefront Core
//!
//! Platform-agnostic cart, catalog and checkout logic for the Harmoni
//! Nusantara landing page. This crate has no DOM or browser dependencies;
//! the presentation layer supplies catalog data and preference storage
//! through the traits below.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod format;
pub mod lang;
pub mod numbers;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use cart::{Cart, CartError, CartLine};
pub use catalog::{Catalog, CatalogItem, RawCard};
pub use checkout::{CheckoutLabels, CheckoutMessageBuilder, build_checkout_message, checkout_url};
pub use config::{ConfigError, ShopConfig};
pub use format::{CurrencyFormat, format_currency};
pub use lang::{Language, UnknownLanguage};
pub use search::{MAX_RESULTS, search, search_with_limit};
pub use session::ShopSession;

/// Trait for abstracting where catalog and configuration come from.
/// Platform-specific implementations should provide this
pub trait ShopLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the catalog index, typically by scanning product cards once.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog source cannot be read.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load a named configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Trait for abstracting the single persisted language preference.
/// Platform-specific implementations should provide this
pub trait PreferenceStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the raw stored value under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unavailable.
    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Entry point wiring a loader and a preference store into sessions.
pub struct ShopEngine<L, P>
where
    L: ShopLoader,
    P: PreferenceStorage,
{
    loader: L,
    preferences: P,
}

impl<L, P> ShopEngine<L, P>
where
    L: ShopLoader,
    P: PreferenceStorage,
{
    /// Create a new engine with the provided loader and preference storage
    pub const fn new(loader: L, preferences: P) -> Self {
        Self {
            loader,
            preferences,
        }
    }

    /// Load the `shop` config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded.
    pub fn config(&self) -> Result<ShopConfig, L::Error> {
        self.loader.load_config("shop")
    }

    /// Saved language, or the default when missing, unreadable or unknown.
    #[must_use]
    pub fn language(&self, config: &ShopConfig) -> Language {
        match self.preferences.load(&config.language_key) {
            Ok(saved) => Language::from_saved(saved.as_deref()),
            Err(err) => {
                log::warn!("language preference unavailable: {err}");
                Language::default()
            }
        }
    }

    /// Persist a new language preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference cannot be written.
    pub fn set_language(&self, config: &ShopConfig, language: Language) -> Result<(), P::Error> {
        self.preferences.save(&config.language_key, language.code())
    }

    /// Construct a fresh session with an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the config or catalog cannot be loaded.
    pub fn create_session(&self) -> Result<ShopSession, anyhow::Error>
    where
        L::Error: Into<anyhow::Error>,
    {
        let config = self.config().map_err(Into::into)?;
        let catalog = self.loader.load_catalog().map_err(Into::into)?;
        let language = self.language(&config);
        log::debug!(
            "session created: {} products, language {language}",
            catalog.len()
        );
        Ok(ShopSession::new(catalog, config, language))
    }
}
