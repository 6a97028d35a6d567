use super::{CartDrawer, CartDrawerProps};
use crate::shop::{CartLine, CurrencyFormat, Language};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer};

fn props(open: bool, lines: Vec<CartLine>) -> CartDrawerProps {
    let total = lines.iter().map(CartLine::line_total).sum();
    CartDrawerProps {
        open,
        lines,
        total,
        currency: CurrencyFormat::default(),
        checkout_href: "https://wa.me/6289607793513?text=Halo".into(),
        lang: Language::En,
        on_increment: Callback::noop(),
        on_decrement: Callback::noop(),
        on_remove: Callback::noop(),
        on_close: Callback::noop(),
    }
}

fn line(name: &str, price: u64, quantity: u32) -> CartLine {
    CartLine {
        name: name.to_string(),
        price,
        quantity,
    }
}

#[test]
fn empty_drawer_shows_message_and_zero_total() {
    crate::i18n::set_lang(Language::En);
    let html = block_on(LocalServerRenderer::<CartDrawer>::with_props(props(false, vec![])).render());
    assert!(html.contains("Your cart is empty"), "html: {html}");
    assert!(html.contains("Rp 0"));
    assert!(html.contains(r#"aria-hidden="true""#));
    assert!(!html.contains("cart-item-name"));
}

#[test]
fn open_drawer_lists_lines_with_totals() {
    crate::i18n::set_lang(Language::En);
    let lines = vec![line("Batik Tulis", 150_000, 1), line("Selendang", 12_500, 2)];
    let html = block_on(LocalServerRenderer::<CartDrawer>::with_props(props(true, lines)).render());
    assert!(html.contains("cart-drawer active"), "html: {html}");
    assert!(html.contains(r#"aria-hidden="false""#));
    assert!(html.contains("Batik Tulis"));
    assert!(html.contains("Rp 25.000"));
    assert!(html.contains("Rp 175.000"));
    assert!(html.contains("Decrease quantity of Selendang"));
    assert!(html.contains("https://wa.me/6289607793513?text=Halo"));
    assert!(html.contains("Order via WhatsApp"));
}

#[test]
fn drawer_labels_follow_language() {
    crate::i18n::set_lang(Language::Id);
    let html = block_on(
        LocalServerRenderer::<CartDrawer>::with_props(CartDrawerProps {
            lang: Language::Id,
            ..props(true, vec![])
        })
        .render(),
    );
    assert!(html.contains("Keranjang"), "html: {html}");
    assert!(html.contains(r#"lang="id""#));
}
