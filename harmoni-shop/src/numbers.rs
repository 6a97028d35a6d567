//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Coerce a raw price attribute into whole currency units.
///
/// Blank, unparsable, non-finite and negative inputs all become 0. Fractional
/// values round to the nearest unit.
#[must_use]
pub fn coerce_price(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse::<f64>().map_or(0, round_f64_to_u64)
}

/// Round a f64 and clamp it to the u64 range, returning 0 for NaN and negatives.
#[must_use]
pub fn round_f64_to_u64(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let max = cast::<u64, f64>(u64::MAX).unwrap_or(f64::MAX);
    let clamped = value.min(max).round();
    cast::<f64, u64>(clamped).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_price_defaults_to_zero() {
        assert_eq!(coerce_price(""), 0);
        assert_eq!(coerce_price("   "), 0);
        assert_eq!(coerce_price("abc"), 0);
        assert_eq!(coerce_price("NaN"), 0);
        assert_eq!(coerce_price("-5000"), 0);
    }

    #[test]
    fn coerce_price_parses_numbers() {
        assert_eq!(coerce_price("150000"), 150_000);
        assert_eq!(coerce_price(" 75000 "), 75_000);
        assert_eq!(coerce_price("1e3"), 1_000);
        assert_eq!(coerce_price("99.6"), 100);
    }

    #[test]
    fn rounding_clamps_extremes() {
        assert_eq!(round_f64_to_u64(f64::INFINITY), 0);
        assert_eq!(round_f64_to_u64(f64::MAX), u64::MAX);
        assert_eq!(round_f64_to_u64(0.4), 0);
    }
}
