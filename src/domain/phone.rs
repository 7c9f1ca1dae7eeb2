//! Phone number format.

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex is valid"));

/// A phone number is exactly ten ASCII digits with no formatting characters.
///
/// # Example
///
/// ```
/// use contact_cards::domain::is_valid_phone;
///
/// assert!(is_valid_phone("1234567890"));
/// assert!(!is_valid_phone("(123) 456-7890"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validates_format() {
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("123-456-7890"));
        assert!(!is_valid_phone("123456789a"));
        assert!(!is_valid_phone(" 1234567890"));
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }
}
