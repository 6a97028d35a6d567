//! String table coverage: both locales carry the same keys and every key the
//! components look up.

use serde_json::Value;
use std::collections::BTreeSet;

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> (String, Value) {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    let json: Value =
        serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"));
    (content, json)
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn shipped_locales_match_language_enum() {
    let codes: Vec<String> = crate::shop::Language::ALL
        .iter()
        .map(|lang| lang.code().to_string())
        .collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(locale_codes(), sorted);
}

#[test]
fn locales_have_matching_keys() {
    let (_, base_json) = load_locale("id");
    let mut base_keys = BTreeSet::new();
    collect_keys("", &base_json, &mut base_keys);

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        assert_eq!(keys, base_keys, "key sets differ for locale '{locale}'");
    }
}

#[test]
fn component_keys_exist() {
    let required_keys = [
        "cart.title",
        "cart.close",
        "cart.empty",
        "cart.total",
        "cart.checkout",
        "cart.increase",
        "cart.decrease",
        "cart.remove",
        "cart.added",
        "cart.removed",
        "search.title",
        "search.placeholder",
        "search.add",
        "search.close",
        "search.results.zero",
        "search.results.one",
        "search.results.other",
        "scroll_top",
    ];

    for locale in locale_codes() {
        let (_, json) = load_locale(&locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in required_keys {
            assert!(keys.contains(key), "Missing key '{key}' in locale '{locale}'");
        }
    }
}

#[test]
fn locales_have_balanced_templates() {
    for locale in locale_codes() {
        let (content, _json) = load_locale(&locale);
        let open_count = content.matches('{').count();
        let close_count = content.matches('}').count();
        assert_eq!(
            open_count, close_count,
            "Unmatched braces in {locale}: {open_count} open, {close_count} close"
        );
    }
}
