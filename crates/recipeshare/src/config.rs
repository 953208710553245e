use std::env;

/// Service configuration loaded from environment variables.
///
/// Loaded once at startup and injected into store construction, so handlers
/// and tests never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target DynamoDB table (default: "recipes")
    pub table_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Target DynamoDB table (default: "recipes")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "recipes".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
