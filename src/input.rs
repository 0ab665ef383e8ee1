//! Free-text numeric input.

use crate::prelude::*;

/// Parse user-typed numeric text, ignoring comma grouping separators.
///
/// Anything that does not produce a finite number becomes zero, so half-typed input
/// never blocks editing. There is no way to tell a typed zero from a cleared invalid entry.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            trace!(text, "coerced to zero");
            0.0
        }
    }
}

/// Truncate the number into a whole non-negative count.
#[must_use]
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_count(value: f64) -> u32 {
    // Float-to-int casts saturate, and negative values end up at zero.
    value as u32
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_grouped() {
        assert_abs_diff_eq!(parse_number("1,000,000"), 1_000_000.0);
        assert_abs_diff_eq!(parse_number("12,345.67"), 12_345.67);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_abs_diff_eq!(parse_number(" 12.5 "), 12.5);
    }

    #[test]
    fn test_invalid_is_zero() {
        assert_abs_diff_eq!(parse_number(""), 0.0);
        assert_abs_diff_eq!(parse_number("abc"), 0.0);
        assert_abs_diff_eq!(parse_number("12abc"), 0.0);
        assert_abs_diff_eq!(parse_number("1.2.3"), 0.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_abs_diff_eq!(parse_number("inf"), 0.0);
        assert_abs_diff_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn test_negative_passes_through() {
        assert_abs_diff_eq!(parse_number("-1,500"), -1500.0);
    }

    #[test]
    fn test_to_count() {
        assert_eq!(to_count(10.9), 10);
        assert_eq!(to_count(-3.0), 0);
        assert_eq!(to_count(0.0), 0);
    }
}
