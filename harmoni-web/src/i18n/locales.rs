use harmoni_shop::Language;
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub lang: Language,
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        lang: Language::Id,
        code: "id",
        name: Language::Id.native_name(),
    },
    LocaleMeta {
        lang: Language::En,
        code: "en",
        name: Language::En.native_name(),
    },
];

const LOCALE_TABLE: &[(Language, &str)] = &[
    (Language::Id, include_str!("../../i18n/id.json")),
    (Language::En, include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn load_translations(lang: Language) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))?;

    serde_json::from_str(bundle).ok()
}
