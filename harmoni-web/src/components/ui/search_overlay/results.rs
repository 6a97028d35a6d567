use crate::i18n;
use crate::shop::{CatalogItem, CurrencyFormat};
use std::collections::BTreeMap;
use yew::prelude::*;

/// "3 products found" style label for a result count.
#[must_use]
pub fn result_count_label(count: usize) -> String {
    // Result lists are capped far below u32::MAX.
    let count = i18n::fmt_number(f64::from(u32::try_from(count).unwrap_or(u32::MAX)));
    let mut vars = BTreeMap::new();
    vars.insert("count", count.as_str());
    i18n::tr("search.results", Some(&vars))
}

/// Key for a result row. Catalog names may repeat, so the position is part of it.
#[must_use]
pub fn row_key(idx: usize, name: &str) -> String {
    format!("{idx}:{name}")
}

#[derive(Properties, PartialEq, Clone)]
pub struct SearchResultRowProps {
    pub item: CatalogItem,
    pub currency: CurrencyFormat,
    pub on_add: Callback<(String, u64)>,
}

#[function_component(SearchResultRow)]
pub fn search_result_row(p: &SearchResultRowProps) -> Html {
    let on_click = {
        let cb = p.on_add.clone();
        let name = p.item.name.clone();
        let price = p.item.price;
        Callback::from(move |_| cb.emit((name.clone(), price)))
    };

    html! {
        <div class="search-result-item" data-name={p.item.name.clone()}>
            <div class="search-result-main">
                <div class="search-result-name">{ &p.item.name }</div>
                <div class="search-result-price">{ i18n::fmt_currency(&p.currency, p.item.price) }</div>
            </div>
            <div class="search-result-actions">
                <button class="search-add-btn" data-action="add" onclick={on_click}>
                    { i18n::t("search.add") }
                </button>
            </div>
        </div>
    }
}
