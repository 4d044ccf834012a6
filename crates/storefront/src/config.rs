//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BREWHAVEN_STORE_PATH` - Path of the local store file
//!   (default: `brewhaven-store.json`)
//! - `BREWHAVEN_CHECKOUT_URL` - Checkout navigation target
//!   (default: `checkout.html`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Where the local key-value store file lives.
    pub store_path: PathBuf,
    /// Where a successful checkout navigates.
    pub checkout_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store_path = get_env_or_default("BREWHAVEN_STORE_PATH", "brewhaven-store.json")?;
        let checkout_url = get_env_or_default("BREWHAVEN_CHECKOUT_URL", "checkout.html")?;

        Ok(Self {
            store_path: PathBuf::from(store_path),
            checkout_url,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("brewhaven-store.json"),
            checkout_url: "checkout.html".to_owned(),
        }
    }
}

/// Get an environment variable with a default, rejecting blank values.
fn get_env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "must not be blank".to_owned(),
        )),
        Ok(value) => Ok(value),
        Err(_) => Ok(default.to_owned()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store_path, PathBuf::from("brewhaven-store.json"));
        assert_eq!(config.checkout_url, "checkout.html");
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        let value = get_env_or_default("BREWHAVEN_UNSET_TEST_VAR", "fallback").unwrap();
        assert_eq!(value, "fallback");
    }
}
