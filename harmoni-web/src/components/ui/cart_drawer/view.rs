use super::line::CartLineRow;
use crate::a11y::aria_hidden;
use crate::i18n;
use crate::shop::{CartLine, CurrencyFormat, Language};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartDrawerProps {
    pub open: bool,
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub currency: CurrencyFormat,
    /// Full `wa.me` link for the current cart.
    pub checkout_href: AttrValue,
    /// Active language, so labels re-render when it changes.
    pub lang: Language,
    pub on_increment: Callback<String>,
    pub on_decrement: Callback<String>,
    pub on_remove: Callback<String>,
    pub on_close: Callback<()>,
}

#[function_component(CartDrawer)]
pub fn cart_drawer(p: &CartDrawerProps) -> Html {
    let on_close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let items = if p.lines.is_empty() {
        html! { <p class="cart-empty">{ i18n::t("cart.empty") }</p> }
    } else {
        html! {
            { for p.lines.iter().map(|line| html! {
                <CartLineRow
                    key={line.name.clone()}
                    line={line.clone()}
                    currency={p.currency.clone()}
                    on_increment={p.on_increment.clone()}
                    on_decrement={p.on_decrement.clone()}
                    on_remove={p.on_remove.clone()}
                />
            }) }
        }
    };

    html! {
        <aside id="cart-drawer"
            class={classes!("cart-drawer", p.open.then_some("active"))}
            aria-hidden={aria_hidden(p.open)}
            aria-labelledby="cart-title"
            lang={p.lang.code()}>
            <header class="cart-header">
                <h3 id="cart-title">{ i18n::t("cart.title") }</h3>
                <button id="cart-close" class="cart-close"
                    aria-label={i18n::t("cart.close")}
                    onclick={on_close}>{ "×" }</button>
            </header>
            <div id="cart-items" class="cart-items">{ items }</div>
            <footer class="cart-footer">
                <div class="cart-total-row">
                    <span>{ i18n::t("cart.total") }</span>
                    <strong id="cart-total">{ i18n::fmt_currency(&p.currency, p.total) }</strong>
                </div>
                <a id="whatsapp-checkout"
                    class={classes!("whatsapp-checkout", p.lines.is_empty().then_some("disabled"))}
                    href={p.checkout_href.clone()}
                    target="_blank"
                    rel="noopener noreferrer">
                    { i18n::t("cart.checkout") }
                </a>
            </footer>
        </aside>
    }
}
