//! WhatsApp checkout message and deep link.
//!
//! The message is a pure function of the cart, its total and the active
//! language, so it is recomputed after every cart mutation rather than
//! updated incrementally.
use urlencoding::encode;

use crate::cart::CartLine;
use crate::format::CurrencyFormat;
use crate::lang::Language;

/// Encoded newline understood by the `wa.me` text parameter.
pub const NEWLINE: &str = "%0A";

/// Base of every checkout link.
pub const WHATSAPP_BASE: &str = "https://wa.me";

/// Localized fixed text of the checkout message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutLabels {
    /// Greeting prefix, followed by the business name and a comma.
    pub greeting: &'static str,
    pub intro: &'static str,
    pub total: &'static str,
    pub name_prompt: &'static str,
    pub address_prompt: &'static str,
    pub payment_prompt: &'static str,
}

const INDONESIAN: CheckoutLabels = CheckoutLabels {
    greeting: "Halo",
    intro: "Saya ingin memesan:",
    total: "Total:",
    name_prompt: "Nama:",
    address_prompt: "Alamat:",
    payment_prompt: "Metode Pembayaran:",
};

const ENGLISH: CheckoutLabels = CheckoutLabels {
    greeting: "Hello",
    intro: "I would like to order:",
    total: "Total:",
    name_prompt: "Name:",
    address_prompt: "Address:",
    payment_prompt: "Payment Method:",
};

impl CheckoutLabels {
    #[must_use]
    pub const fn for_language(lang: Language) -> Self {
        match lang {
            Language::Id => INDONESIAN,
            Language::En => ENGLISH,
        }
    }
}

/// Builds checkout messages for one business and currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutMessageBuilder {
    pub business_name: String,
    pub currency: CurrencyFormat,
}

impl Default for CheckoutMessageBuilder {
    fn default() -> Self {
        Self {
            business_name: "Harmoni Nusantara".to_string(),
            currency: CurrencyFormat::rupiah(),
        }
    }
}

impl CheckoutMessageBuilder {
    #[must_use]
    pub fn new(business_name: impl Into<String>, currency: CurrencyFormat) -> Self {
        Self {
            business_name: business_name.into(),
            currency,
        }
    }

    /// Plain-text lines of the message, before encoding.
    #[must_use]
    pub fn plain_lines(&self, cart: &[CartLine], total: u64, lang: Language) -> Vec<String> {
        let labels = CheckoutLabels::for_language(lang);
        let mut lines = Vec::with_capacity(cart.len() + 7);
        lines.push(format!("{} {},", labels.greeting, self.business_name));
        lines.push(labels.intro.to_string());
        lines.extend(cart.iter().map(|line| {
            format!(
                "- {} x{} = {}",
                line.name,
                line.quantity,
                self.currency.format(line.line_total())
            )
        }));
        lines.push(format!("{} {}", labels.total, self.currency.format(total)));
        lines.push(String::new());
        lines.push(labels.name_prompt.to_string());
        lines.push(labels.address_prompt.to_string());
        lines.push(labels.payment_prompt.to_string());
        lines
    }

    /// Percent-encoded message: each line encoded on its own and joined with
    /// [`NEWLINE`].
    #[must_use]
    pub fn build(&self, cart: &[CartLine], total: u64, lang: Language) -> String {
        self.plain_lines(cart, total, lang)
            .iter()
            .map(|line| encode(line).into_owned())
            .collect::<Vec<_>>()
            .join(NEWLINE)
    }
}

/// Build the message with the default business name and Rupiah format.
#[must_use]
pub fn build_checkout_message(cart: &[CartLine], total: u64, lang: Language) -> String {
    CheckoutMessageBuilder::default().build(cart, total, lang)
}

/// `wa.me` deep link prefilled with an already-encoded message.
#[must_use]
pub fn checkout_url(phone: &str, encoded_message: &str) -> String {
    format!("{WHATSAPP_BASE}/{phone}?text={encoded_message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_to_cart("Kemeja Batik", 50_000).unwrap();
        cart.add_to_cart("Kemeja Batik", 50_000).unwrap();
        cart.add_to_cart("Selendang", 75_000).unwrap();
        cart
    }

    #[test]
    fn indonesian_message_has_expected_encoding() {
        let cart = sample_cart();
        let msg = build_checkout_message(cart.lines(), cart.total(), Language::Id);
        assert_eq!(
            msg,
            "Halo%20Harmoni%20Nusantara%2C%0A\
             Saya%20ingin%20memesan%3A%0A\
             -%20Kemeja%20Batik%20x2%20%3D%20Rp%20100.000%0A\
             -%20Selendang%20x1%20%3D%20Rp%2075.000%0A\
             Total%3A%20Rp%20175.000%0A\
             %0A\
             Nama%3A%0A\
             Alamat%3A%0A\
             Metode%20Pembayaran%3A"
        );
    }

    #[test]
    fn empty_cart_still_lists_total_and_prompts() {
        let lines = CheckoutMessageBuilder::default().plain_lines(&[], 0, Language::En);
        assert_eq!(
            lines,
            [
                "Hello Harmoni Nusantara,",
                "I would like to order:",
                "Total: Rp 0",
                "",
                "Name:",
                "Address:",
                "Payment Method:",
            ]
        );
    }

    #[test]
    fn dynamic_segments_cannot_inject_separators() {
        let mut cart = Cart::new();
        cart.add_to_cart("A&B\nC?", 1_000).unwrap();
        let msg = build_checkout_message(cart.lines(), cart.total(), Language::Id);
        assert!(msg.contains("A%26B%0AC%3F"));
        assert!(!msg.contains('&'));
        assert!(!msg.contains('?'));
    }

    #[test]
    fn language_swaps_labels_but_not_item_lines() {
        let cart = sample_cart();
        let builder = CheckoutMessageBuilder::default();
        let id = builder.plain_lines(cart.lines(), cart.total(), Language::Id);
        let en = builder.plain_lines(cart.lines(), cart.total(), Language::En);
        assert_eq!(id.len(), en.len());
        assert_eq!(id[2..4], en[2..4]);
        assert_ne!(id[0], en[0]);
    }

    #[test]
    fn url_embeds_phone_and_message() {
        assert_eq!(
            checkout_url("6289607793513", "Halo"),
            "https://wa.me/6289607793513?text=Halo"
        );
    }
}
