//! Shopping cart state.
//!
//! Lines keep first-added order and are identified by product name. The
//! index-based operations exist for callers that resolve positions from the
//! current render; UI code should prefer the name-keyed variants, which look
//! the index up at call time and so never act on a stale position.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a cart mutation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("product name is empty")]
    EmptyName,
    #[error("product `{0}` has no price")]
    ZeroPrice(String),
    #[error("cart line {index} out of bounds (cart has {len} lines)")]
    OutOfBounds { index: usize, len: usize },
    #[error("no cart line for `{0}`")]
    UnknownLine(String),
}

/// A line item in the shopping cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub name: String,
    /// Unit price captured when the line was first added.
    pub price: u64,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Shopping cart state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in first-added order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Find a cart line by product name.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.name == name)
    }

    /// Current position of the line for `name`.
    #[must_use]
    pub fn line_index(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name == name)
    }

    /// Add one unit of a product.
    ///
    /// An existing line gains one unit and keeps its original price; otherwise
    /// a new line is appended. Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyName`] or [`CartError::ZeroPrice`] for input
    /// that cannot describe a purchasable product.
    pub fn add_to_cart(&mut self, name: &str, price: u64) -> Result<u32, CartError> {
        if name.is_empty() {
            return Err(CartError::EmptyName);
        }
        if price == 0 {
            return Err(CartError::ZeroPrice(name.to_string()));
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(1);
            log::debug!("cart: {name} -> x{}", line.quantity);
            return Ok(line.quantity);
        }
        self.lines.push(CartLine {
            name: name.to_string(),
            price,
            quantity: 1,
        });
        log::debug!("cart: added {name} at {price}");
        Ok(1)
    }

    /// Increase the quantity of the line at `index` by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfBounds`] if `index` is not a current line.
    pub fn increment_line(&mut self, index: usize) -> Result<u32, CartError> {
        let line = self.line_at_mut(index)?;
        line.quantity = line.quantity.saturating_add(1);
        Ok(line.quantity)
    }

    /// Decrease the quantity of the line at `index`, never below 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfBounds`] if `index` is not a current line.
    pub fn decrement_line(&mut self, index: usize) -> Result<u32, CartError> {
        let line = self.line_at_mut(index)?;
        line.quantity = line.quantity.saturating_sub(1).max(1);
        Ok(line.quantity)
    }

    /// Remove the line at `index`; later lines shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfBounds`] if `index` is not a current line.
    pub fn remove_line(&mut self, index: usize) -> Result<CartLine, CartError> {
        if index >= self.lines.len() {
            return Err(self.out_of_bounds(index));
        }
        let removed = self.lines.remove(index);
        log::debug!("cart: removed {}", removed.name);
        Ok(removed)
    }

    /// Name-keyed [`Cart::increment_line`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownLine`] if no line has this name.
    pub fn increment(&mut self, name: &str) -> Result<u32, CartError> {
        let index = self.index_of(name)?;
        self.increment_line(index)
    }

    /// Name-keyed [`Cart::decrement_line`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownLine`] if no line has this name.
    pub fn decrement(&mut self, name: &str) -> Result<u32, CartError> {
        let index = self.index_of(name)?;
        self.decrement_line(index)
    }

    /// Name-keyed [`Cart::remove_line`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownLine`] if no line has this name.
    pub fn remove(&mut self, name: &str) -> Result<CartLine, CartError> {
        let index = self.index_of(name)?;
        self.remove_line(index)
    }

    /// Sum of `price * quantity` over every line.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// Sum of quantities, shown on the cart badge.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |acc, line| acc.saturating_add(u64::from(line.quantity)))
    }

    /// Clear the entire cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn index_of(&self, name: &str) -> Result<usize, CartError> {
        self.line_index(name)
            .ok_or_else(|| CartError::UnknownLine(name.to_string()))
    }

    fn line_at_mut(&mut self, index: usize) -> Result<&mut CartLine, CartError> {
        let len = self.lines.len();
        self.lines
            .get_mut(index)
            .ok_or(CartError::OutOfBounds { index, len })
    }

    fn out_of_bounds(&self, index: usize) -> CartError {
        CartError::OutOfBounds {
            index,
            len: self.lines.len(),
        }
    }
}
