//! Email address syntax.

use once_cell::sync::Lazy;
use regex::Regex;

/// Email syntax: a dot-atom local part and a domain of one or more dotted labels.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// Check email syntax.
///
/// # Example
///
/// ```
/// use contact_cards::domain::is_valid_email;
///
/// assert!(is_valid_email("a@x.com"));
/// assert!(!is_valid_email("user@domain"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
