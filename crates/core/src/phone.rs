//! Bangladeshi phone normalization and contact validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Local mobile numbers: 11 digits, `01` prefix, operator digit 3-9.
static BD_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^01[3-9]\d{8}$").expect("valid mobile pattern"));

/// Deliberately loose email shape: one `@`, dotted domain. Matching the
/// server's own acceptance rather than RFC 5322.
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Normalize a Bangladeshi phone number.
///
/// Strips every non-digit, drops a leading `880` country code, and ensures
/// a leading zero.
///
/// ```rust
/// use lifeplus_core::phone::format_phone;
///
/// assert_eq!(format_phone("+880 1712-345678"), "01712345678");
/// assert_eq!(format_phone("1712345678"), "01712345678");
/// ```
#[must_use]
pub fn format_phone(phone: &str) -> String {
    let mut cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();

    if let Some(stripped) = cleaned.strip_prefix("880") {
        cleaned = stripped.to_string();
    }

    if !cleaned.starts_with('0') {
        cleaned.insert(0, '0');
    }

    cleaned
}

/// Check whether a phone number is a valid Bangladeshi mobile number.
///
/// The input is normalized with [`format_phone`] before matching.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    BD_MOBILE.is_match(&format_phone(phone))
}

/// Check whether an email address looks deliverable.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_strips_country_code() {
        assert_eq!(format_phone("+880 1712-345678"), "01712345678");
        assert_eq!(format_phone("8801913705269"), "01913705269");
    }

    #[test]
    fn test_format_phone_adds_leading_zero() {
        assert_eq!(format_phone("1712345678"), "01712345678");
    }

    #[test]
    fn test_format_phone_already_normalized() {
        assert_eq!(format_phone("01712345678"), "01712345678");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("01712345678"));
        assert!(is_valid_phone("+880 1712-345678"));
        // Landline prefix, not a mobile number
        assert!(!is_valid_phone("0211234567"));
        // Operator digit out of range
        assert!(!is_valid_phone("01212345678"));
        // Too short
        assert!(!is_valid_phone("0171234567"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("mamun@lifeplusbd.com"));
        assert!(is_valid_email("a.b@c.co"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("spaces in@domain.com"));
        assert!(!is_valid_email("user@nodot"));
    }
}
