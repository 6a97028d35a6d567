//! Slide-in cart drawer: line items, total and the WhatsApp checkout link.

mod line;
mod view;

#[cfg(test)]
mod tests;

pub use line::{CartLineRow, CartLineRowProps};
pub use view::{CartDrawer, CartDrawerProps};
