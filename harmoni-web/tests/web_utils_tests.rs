use harmoni_web::shop::{
    DomCatalogLoader, Language, PreferenceStorage, ShopLoader, ShopSession, WebPreferenceStorage,
    web_config, web_engine,
};
use harmoni_web::{dom, i18n};
use serde_json::Value;
use std::collections::BTreeMap;

#[test]
fn dom_helpers_degrade_off_browser() {
    assert!(dom::window().is_none());
    assert!(dom::document().is_none());
    assert!(dom::by_id("cart-drawer").is_none());
    assert!(dom::query_all(".collection-card").is_empty());
    assert_eq!(i18n::apply_translations(), 0);
}

#[test]
fn i18n_bundle_switches_and_interpolates() {
    i18n::set_lang(Language::En);
    assert_eq!(i18n::current_lang(), Language::En);
    assert_eq!(i18n::t("cart.title"), "Cart");

    let mut vars = BTreeMap::new();
    vars.insert("item", "Batik Tulis");
    assert_eq!(
        i18n::tr("cart.added", Some(&vars)),
        "Batik Tulis added to cart"
    );
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang(Language::Id);
    assert_eq!(i18n::t("search.add"), "Tambah");
    assert_eq!(i18n::fmt_number(12.5), "12.5");
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.code == "id" && m.lang == Language::Id));
    assert!(metas.iter().any(|m| m.code == "en" && m.name == "English"));
}

#[test]
fn embedded_config_matches_defaults() {
    let config = web_config();
    assert_eq!(config.business_name, "Harmoni Nusantara");
    assert_eq!(config.whatsapp_phone, "6289607793513");
    assert_eq!(config.language_key, "harmoni.lang");
    assert_eq!(i18n::fmt_currency(&config.currency(), 175_000), "Rp 175.000");
}

#[test]
fn dom_loader_flags_unknown_config() {
    let err = DomCatalogLoader
        .load_config::<Value>("missing-config")
        .expect_err("missing config should error");
    assert!(format!("{err}").contains("Unknown config"));
}

#[test]
fn dom_loader_reads_no_cards_off_browser() {
    let catalog = DomCatalogLoader.load_catalog().expect("catalog");
    assert!(catalog.is_empty());
}

#[test]
fn storage_errors_without_local_storage() {
    let err = WebPreferenceStorage
        .load("harmoni.lang")
        .expect_err("no storage off browser");
    assert!(format!("{err}").contains("unavailable"));
}

#[test]
fn engine_falls_back_to_default_language() {
    let engine = web_engine();
    let config = engine.config().expect("embedded config");
    assert_eq!(engine.language(&config), Language::Id);
    let session: ShopSession = engine.create_session().expect("session");
    assert_eq!(session.language(), Language::Id);
    assert_eq!(session.get_count(), 0);
}
