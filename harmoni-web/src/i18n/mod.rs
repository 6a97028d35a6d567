mod apply;
mod bundle;
mod format;
mod locales;
mod render;

pub use apply::apply_translations;
pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_currency, fmt_number};
pub use locales::{LocaleMeta, locales};
pub use render::{t, tr};
