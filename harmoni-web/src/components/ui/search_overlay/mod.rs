//! Full-screen product search.

mod results;
mod view;

#[cfg(test)]
mod tests;

pub use results::{SearchResultRow, SearchResultRowProps, result_count_label, row_key};
pub use view::{SEARCH_FOCUS_DELAY_MS, SearchOverlay, SearchOverlayProps};
