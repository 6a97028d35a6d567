use super::{SearchOverlay, SearchOverlayProps, result_count_label, row_key};
use crate::shop::{CatalogItem, CurrencyFormat, Language};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn item(name: &str, price: u64) -> CatalogItem {
    CatalogItem {
        name: name.to_string(),
        price,
        image_ref: None,
    }
}

fn props(query: &str, results: Vec<CatalogItem>) -> SearchOverlayProps {
    SearchOverlayProps {
        open: true,
        query: query.to_string().into(),
        results,
        currency: CurrencyFormat::default(),
        lang: Language::Id,
        on_query: Callback::noop(),
        on_add: Callback::noop(),
        on_close: Callback::noop(),
    }
}

#[test]
fn count_label_uses_plural_forms() {
    crate::i18n::set_lang(Language::En);
    assert_eq!(result_count_label(0), "No matching products");
    assert_eq!(result_count_label(1), "1 product found");
    assert_eq!(result_count_label(5), "5 products found");
}

#[test]
fn results_render_name_price_and_add_button() {
    crate::i18n::set_lang(Language::Id);
    let results = vec![item("Batik Tulis", 175_000), item("Batik Cap", 90_000)];
    let html =
        block_on(LocalServerRenderer::<SearchOverlay>::with_props(props("batik", results)).render());
    assert!(html.contains("search-overlay active"), "html: {html}");
    assert!(html.contains("Batik Tulis"));
    assert!(html.contains("Rp 175.000"));
    assert!(html.contains("Rp 90.000"));
    assert_eq!(html.matches("search-add-btn").count(), 2);
    assert!(html.contains("Tambah"));
    assert!(html.contains("2 produk ditemukan"));
}

#[test]
fn blank_query_hides_count_and_rows() {
    crate::i18n::set_lang(Language::Id);
    let html = block_on(LocalServerRenderer::<SearchOverlay>::with_props(props("  ", vec![])).render());
    assert!(!html.contains("search-count"), "html: {html}");
    assert!(!html.contains("search-result-item"));
    assert!(html.contains("Ketik nama produk..."));
}

#[test]
fn closed_overlay_is_hidden() {
    crate::i18n::set_lang(Language::En);
    let html = block_on(
        LocalServerRenderer::<SearchOverlay>::with_props(SearchOverlayProps {
            open: false,
            lang: Language::En,
            ..props("", vec![])
        })
        .render(),
    );
    assert!(html.contains(r#"aria-hidden="true""#), "html: {html}");
    assert!(!html.contains("search-overlay active"));
}

#[test]
fn duplicate_names_render_one_row_each() {
    crate::i18n::set_lang(Language::Id);
    let results = vec![item("Songket", 100_000), item("Songket", 200_000)];
    let html = block_on(
        LocalServerRenderer::<SearchOverlay>::with_props(props("songket", results)).render(),
    );
    assert_eq!(html.matches("search-result-item").count(), 2, "html: {html}");
    assert!(html.contains("Rp 100.000"));
    assert!(html.contains("Rp 200.000"));
    assert_ne!(row_key(0, "Songket"), row_key(1, "Songket"));
}
