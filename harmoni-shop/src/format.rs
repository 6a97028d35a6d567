//! Currency rendering for whole-unit amounts.
use serde::{Deserialize, Serialize};

/// Label and grouping used when rendering an amount.
///
/// The storefront sells in a single currency, so one format is fixed for the
/// whole session regardless of the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub label: String,
    pub group_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::rupiah()
    }
}

impl CurrencyFormat {
    /// Indonesian Rupiah with `id-ID` digit grouping.
    #[must_use]
    pub fn rupiah() -> Self {
        Self {
            label: "Rp".to_string(),
            group_separator: '.',
        }
    }

    /// Render `amount` as `"{label} {grouped digits}"`.
    #[must_use]
    pub fn format(&self, amount: u64) -> String {
        format!("{} {}", self.label, group_digits(amount, self.group_separator))
    }
}

/// Format an amount with the default Rupiah format.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    CurrencyFormat::rupiah().format(amount)
}

fn group_digits(amount: u64, separator: char) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupiah_groups_thousands_with_dots() {
        assert_eq!(format_currency(175_000), "Rp 175.000");
        assert_eq!(format_currency(1_250_000), "Rp 1.250.000");
        assert_eq!(format_currency(999), "Rp 999");
        assert_eq!(format_currency(0), "Rp 0");
    }

    #[test]
    fn custom_format_uses_its_label_and_separator() {
        let fmt = CurrencyFormat {
            label: "IDR".to_string(),
            group_separator: ',',
        };
        assert_eq!(fmt.format(12_345_678), "IDR 12,345,678");
    }

    #[test]
    fn grouping_handles_exact_multiples_of_three() {
        assert_eq!(group_digits(100_000, '.'), "100.000");
        assert_eq!(group_digits(1_000, '.'), "1.000");
        assert_eq!(group_digits(u64::MAX, '.'), "18.446.744.073.709.551.615");
    }
}
