#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
use harmoni_shop::CurrencyFormat;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a plain number using the current locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = {
                let arr = js_sys::Array::new();
                arr.push(&JsValue::from_str(bundle.lang.code()));
                arr
            };
            let nf = Intl::NumberFormat::new(&locales, &Object::new());
            let format_fn: Function = nf.format();
            format_fn
                .call1(&nf, &JsValue::from_f64(num))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| num.to_string())
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}

/// Format a price with the shop currency.
///
/// Prices are always grouped the Indonesian way, whatever the UI language,
/// so this does not go through Intl.
#[must_use]
pub fn fmt_currency(format: &CurrencyFormat, amount: u64) -> String {
    format.format(amount)
}
