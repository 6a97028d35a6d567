use crate::i18n::locales::load_translations;
use harmoni_shop::Language;
use serde_json::Value;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: Language,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: Language) -> Option<I18nBundle> {
    let fallback = load_translations(Language::default())?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang,
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    I18nBundle {
        lang: Language::default(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(Language::default()).unwrap_or_else(empty_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language for internationalization
///
/// Changes the active string table and updates the `<html lang>` attribute.
/// Persisting the choice is the caller's job.
pub fn set_lang(lang: Language) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("no string table for {lang}");
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", lang.code());
        }
    }
}

/// Get the current active language
#[must_use]
pub fn current_lang() -> Language {
    with_bundle(|bundle| bundle.lang)
}
