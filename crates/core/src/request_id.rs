//! Request-correlation ID generation

use uuid::Uuid;

/// Generate a random request ID (v4 UUID string).
///
/// Attached to every outgoing API request as `X-Request-ID` so that server
/// logs can be correlated with client traces.
#[must_use]
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_id_shape() {
        let id = generate_request_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_generate_request_id_unique() {
        assert_ne!(generate_request_id(), generate_request_id());
    }
}
