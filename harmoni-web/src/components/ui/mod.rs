pub mod cart_drawer;
pub mod search_overlay;
