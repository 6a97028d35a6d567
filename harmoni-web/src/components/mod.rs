pub mod scroll_top;
pub mod ui;
