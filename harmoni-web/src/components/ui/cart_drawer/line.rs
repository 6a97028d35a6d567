use crate::i18n;
use crate::shop::{CartLine, CurrencyFormat};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CartLineRowProps {
    pub line: CartLine,
    pub currency: CurrencyFormat,
    pub on_increment: Callback<String>,
    pub on_decrement: Callback<String>,
    pub on_remove: Callback<String>,
}

fn emit_name(cb: &Callback<String>, name: &str) -> Callback<MouseEvent> {
    let cb = cb.clone();
    let name = name.to_string();
    Callback::from(move |_| cb.emit(name.clone()))
}

#[function_component(CartLineRow)]
pub fn cart_line_row(p: &CartLineRowProps) -> Html {
    let name = p.line.name.as_str();
    let mut vars = BTreeMap::new();
    vars.insert("item", name);

    html! {
        <div class="cart-item" data-name={name.to_string()}>
            <div>
                <div class="cart-item-name">{ name }</div>
                <div class="cart-item-actions">
                    <button class="qty-btn" data-action="dec"
                        aria-label={i18n::tr("cart.decrease", Some(&vars))}
                        onclick={emit_name(&p.on_decrement, name)}>{ "-" }</button>
                    <span class="cart-item-qty">{ p.line.quantity }</span>
                    <button class="qty-btn" data-action="inc"
                        aria-label={i18n::tr("cart.increase", Some(&vars))}
                        onclick={emit_name(&p.on_increment, name)}>{ "+" }</button>
                    <button class="qty-btn" data-action="remove"
                        aria-label={i18n::tr("cart.remove", Some(&vars))}
                        onclick={emit_name(&p.on_remove, name)}>{ "×" }</button>
                </div>
            </div>
            <div class="cart-item-price">{ i18n::fmt_currency(&p.currency, p.line.line_total()) }</div>
        </div>
    }
}
