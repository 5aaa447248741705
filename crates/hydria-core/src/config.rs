//! Configuration module
//!
//! Environment-driven configuration for the platform core. No secrets live
//! here; authentication tokens are handled entirely by the auth-state
//! provider behind the gate.

use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_AUTH_INIT_TIMEOUT_SECS: u64 = 10;

/// Core configuration shared by the client and the validators.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    /// Base URL of the platform REST API.
    pub api_url: String,
    /// Bound on waiting for authentication-state initialization.
    pub auth_init_timeout: Duration,
    /// Strict technology-config validation: report undeclared fields.
    pub strict_schema: bool,
    pub environment: String,
}

impl CoreConfig {
    /// Load configuration from `HYDRIA_*` environment variables, with
    /// defaults suitable for local development.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let auth_init_timeout_secs = env::var("HYDRIA_AUTH_INIT_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_AUTH_INIT_TIMEOUT_SECS);

        Self {
            api_url: env::var("HYDRIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            auth_init_timeout: Duration::from_secs(auth_init_timeout_secs),
            strict_schema: env::var("HYDRIA_STRICT_SCHEMA")
                .map(|value| value == "true" || value == "1")
                .unwrap_or(false),
            environment: env::var("HYDRIA_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_init_timeout: Duration::from_secs(DEFAULT_AUTH_INIT_TIMEOUT_SECS),
            strict_schema: false,
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.auth_init_timeout, Duration::from_secs(10));
        assert!(!config.strict_schema);
    }
}
