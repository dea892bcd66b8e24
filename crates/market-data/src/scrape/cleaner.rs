/// Parse a number out of noisy page text.
///
/// Keeps only ASCII digits and `.`, then parses what is left. Signs, currency
/// symbols, thousands separators and whitespace are all dropped, so `"-₹10"`
/// reads as `10.0`. Returns `None` for missing input, an empty remainder, or
/// anything that still fails to parse (e.g. two decimal points).
pub fn clean_number(text: Option<&str>) -> Option<f64> {
    let cleaned: String = text?
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_currency_and_separators() {
        assert_eq!(clean_number(Some("₹1,234.56")), Some(1234.56));
        assert_eq!(clean_number(Some("  ₹ 72,450 ")), Some(72450.0));
        assert_eq!(clean_number(Some("\u{a0}₹95.50\u{a0}")), Some(95.5));
    }

    #[test]
    fn test_drops_sign() {
        assert_eq!(clean_number(Some("+ ₹10")), Some(10.0));
        assert_eq!(clean_number(Some("-₹110")), Some(110.0));
    }

    #[test]
    fn test_missing_or_non_numeric_is_none() {
        assert_eq!(clean_number(None), None);
        assert_eq!(clean_number(Some("")), None);
        assert_eq!(clean_number(Some("abc")), None);
        assert_eq!(clean_number(Some("₹")), None);
    }

    #[test]
    fn test_multiple_decimal_points_is_none() {
        assert_eq!(clean_number(Some("1.234.56")), None);
    }

    #[test]
    fn test_stray_dot_is_kept() {
        // "Rs. 500" keeps the abbreviation's dot and reads as ".500".
        assert_eq!(clean_number(Some("Rs. 500")), Some(0.5));
    }
}
