//! Catalog index built from product cards on the page.
use serde::{Deserialize, Serialize};

use crate::numbers::coerce_price;

/// A purchasable item discovered from page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Display name, also the cart identity key. Uniqueness is not enforced.
    pub name: String,
    /// Price in whole currency units.
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// Raw attribute values read from one product card, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl RawCard {
    #[must_use]
    pub fn new(name: Option<&str>, price: Option<&str>, image: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            price: price.map(str::to_string),
            image: image.map(str::to_string),
        }
    }
}

impl From<RawCard> for CatalogItem {
    fn from(card: RawCard) -> Self {
        Self {
            name: card.name.unwrap_or_default(),
            price: card.price.as_deref().map_or(0, coerce_price),
            image_ref: card.image.filter(|src| !src.is_empty()),
        }
    }
}

/// Immutable list of catalog items in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Build the index from raw card attributes. Malformed prices become 0.
    #[must_use]
    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = RawCard>,
    {
        let items: Vec<CatalogItem> = cards.into_iter().map(CatalogItem::from).collect();
        log::debug!("catalog indexed {} products", items.len());
        Self { items }
    }

    /// Parse a JSON array of catalog items.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<CatalogItem>>(json).map(Self::new)
    }

    /// Every product in page order.
    #[must_use]
    pub fn all_products(&self) -> &[CatalogItem] {
        &self.items
    }

    /// First item with the given name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
