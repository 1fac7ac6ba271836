// crates/thai-address-core/src/text.rs

//! Small text helpers shared by the lookup and search code.

/// Lowercases a string for case-insensitive comparison.
///
/// Thai script has no case, so Thai text passes through unchanged while
/// Latin text is lowercased with full Unicode rules.
///
/// # Examples
///
/// ```rust
/// use thai_address_core::text::fold_case;
///
/// assert_eq!(fold_case("Bangkok"), "bangkok");
/// assert_eq!(fold_case("กรุงเทพมหานคร"), "กรุงเทพมหานคร");
/// ```
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Parses a textual id or zip code into the integer it names.
///
/// Only the canonical decimal rendering is accepted, so a key matches a
/// stored value exactly when formatting that value would reproduce the key.
/// Signs, leading zeros and surrounding whitespace are rejected.
///
/// # Examples
///
/// ```rust
/// use thai_address_core::text::parse_key;
///
/// assert_eq!(parse_key("10200"), Some(10200));
/// assert_eq!(parse_key("0"), Some(0));
/// assert_eq!(parse_key("010200"), None);
/// assert_eq!(parse_key(" 10200"), None);
/// assert_eq!(parse_key("+1"), None);
/// ```
pub fn parse_key(s: &str) -> Option<u32> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s.len() == 1 || !s.starts_with('0'));
    if !canonical {
        return None;
    }
    s.parse().ok()
}

/// Parses a textual coordinate into degrees.
///
/// Returns `None` for anything `f64` parsing rejects, and for NaN, which
/// could never compare equal to a stored coordinate anyway.
pub fn parse_coordinate(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_key_rejects_non_canonical_text() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("00"), None);
        assert_eq!(parse_key("-5"), None);
        assert_eq!(parse_key("12a"), None);
        assert_eq!(parse_key("10200 "), None);
        // overflows u32
        assert_eq!(parse_key("99999999999"), None);
    }

    #[test]
    fn parse_coordinate_accepts_plain_and_trailing_zero_forms() {
        assert_eq!(parse_coordinate("13.751"), Some(13.751));
        assert_eq!(parse_coordinate("13.7510"), Some(13.751));
        assert_eq!(parse_coordinate("100"), Some(100.0));
        assert_eq!(parse_coordinate("NaN"), None);
        assert_eq!(parse_coordinate("north"), None);
    }

    #[test]
    fn fold_case_handles_mixed_scripts() {
        assert_eq!(fold_case("Khet DUSIT ดุสิต"), "khet dusit ดุสิต");
    }
}
