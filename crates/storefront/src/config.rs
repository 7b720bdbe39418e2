//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_NAME` - Banner title (default: `Pop! Shop`)
//! - `STOREFRONT_CONFIRM_REMOVAL` - Ask before removing the last unit of a
//!   product (default: `true`; accepts `true/false/1/0/yes/no/on/off`)
//! - `STOREFRONT_CATALOG_PATH` - JSON file replacing the built-in catalog

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_STORE_NAME: &str = "Pop! Shop";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Title shown in the shell banner
    pub store_name: String,
    /// Whether removing the last unit needs confirmation
    pub confirm_removal: bool,
    /// Alternate catalog file
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            confirm_removal: true,
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_name = lookup("STOREFRONT_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let confirm_removal = match lookup("STOREFRONT_CONFIRM_REMOVAL") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "STOREFRONT_CONFIRM_REMOVAL".to_string(),
                    format!("expected a boolean, got '{value}'"),
                )
            })?,
            None => true,
        };

        let catalog_path = lookup("STOREFRONT_CATALOG_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            store_name,
            confirm_removal,
            catalog_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a human-friendly boolean.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
