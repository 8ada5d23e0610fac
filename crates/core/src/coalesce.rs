//! Null-safe accessors for optional API fields
//!
//! Generated response types leave most fields optional. These helpers
//! collapse `Option` values to sensible zero values at display boundaries.

/// Get a string value, or an empty string when absent.
#[must_use]
pub fn string_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Get a numeric value, or zero when absent.
#[must_use]
pub fn number_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

/// Get a boolean value, or `false` when absent.
#[must_use]
pub fn bool_or_false(value: Option<bool>) -> bool {
    value.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_or_empty() {
        assert_eq!(string_or_empty(Some("hello")), "hello");
        assert_eq!(string_or_empty(None), "");
    }

    #[test]
    fn test_number_or_zero() {
        assert!((number_or_zero(Some(12.5)) - 12.5).abs() < f64::EPSILON);
        assert!((number_or_zero(None) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bool_or_false() {
        assert!(bool_or_false(Some(true)));
        assert!(!bool_or_false(None));
    }
}
