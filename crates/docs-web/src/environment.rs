//! Documentation environment selection

/// Local-storage key holding the chosen API server URL.
pub const STORAGE_KEY: &str = "lifeplus-api-server";

/// Server used when no choice has been persisted.
pub const DEFAULT_SERVER: &str = "https://api.lifeplusbd.com/api/v2";

/// Staging API server.
pub const STAGING_SERVER: &str = "https://staging-api.lifeplusbd.com/api/v2";

/// Local development server.
pub const LOCAL_SERVER: &str = "http://localhost:8080/api/v2";

/// A selectable documentation environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsEnvironment {
    /// Live production API
    Production,
    /// Staging API
    Staging,
    /// Local development server
    Local,
}

impl DocsEnvironment {
    /// Classify a server URL into an environment.
    #[must_use]
    pub fn classify(url: &str) -> Self {
        if url.contains("localhost") || url.contains("127.0.0.1") {
            Self::Local
        } else if url.contains("staging") {
            Self::Staging
        } else {
            Self::Production
        }
    }

    /// Human-readable environment name shown in notifications.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Production => "Production",
            Self::Staging => "Staging",
            Self::Local => "Local Development",
        }
    }

    /// The server URL this environment points at.
    #[must_use]
    pub fn server_url(self) -> &'static str {
        match self {
            Self::Production => DEFAULT_SERVER,
            Self::Staging => STAGING_SERVER,
            Self::Local => LOCAL_SERVER,
        }
    }

    /// All selectable environments, in display order.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Production, Self::Staging, Self::Local]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            DocsEnvironment::classify("https://api.lifeplusbd.com/api/v2"),
            DocsEnvironment::Production
        );
        assert_eq!(
            DocsEnvironment::classify("https://staging-api.lifeplusbd.com/api/v2"),
            DocsEnvironment::Staging
        );
        assert_eq!(
            DocsEnvironment::classify("http://localhost:8080/api/v2"),
            DocsEnvironment::Local
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(DocsEnvironment::Local.label(), "Local Development");
        assert_eq!(DocsEnvironment::Production.label(), "Production");
    }

    #[test]
    fn test_round_trip_through_url() {
        for env in DocsEnvironment::all() {
            assert_eq!(DocsEnvironment::classify(env.server_url()), env);
        }
    }
}
