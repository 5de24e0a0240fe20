//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront
//! - `CATALOG_GRAPHQL_URL` - GraphQL endpoint of the catalog backend
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_SITE_NAME` - Suffix for page titles (default: Shoebox)
//! - `STOREFRONT_IMAGE_BASE_URL` - CDN prefix that layout-card asset ids are appended to
//! - `STOREFRONT_LOG_FORMAT` - `json` for JSON log lines, anything else for text
//! - `CATALOG_ACCESS_TOKEN` - Bearer token for the catalog backend
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_TOKEN_BITS_PER_CHAR: f64 = 3.3;

/// Substrings of `.env.example` style tokens, matched case-insensitively.
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-", "your_", "changeme", "placeholder", "example", "token-here", "xxx", "todo", "<",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Appended to every page title
    pub site_name: String,
    /// CDN prefix for layout-card asset ids
    pub image_base_url: Option<String>,
    /// Log line format
    pub log_format: LogFormat,
    /// Catalog backend configuration
    pub catalog: CatalogConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Catalog backend configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct CatalogConfig {
    /// GraphQL endpoint URL
    pub graphql_url: String,
    /// Optional bearer token (server-side only)
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("graphql_url", &self.graphql_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the access token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_required_url("STOREFRONT_BASE_URL")?;
        let site_name = get_env_or_default("STOREFRONT_SITE_NAME", "Shoebox");
        let image_base_url = get_optional_env("STOREFRONT_IMAGE_BASE_URL")
            .map(|url| validate_url(&url, "STOREFRONT_IMAGE_BASE_URL"))
            .transpose()?;
        let log_format = parse_log_format(get_optional_env("STOREFRONT_LOG_FORMAT").as_deref());

        let catalog = CatalogConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            base_url,
            site_name,
            image_base_url,
            log_format,
            catalog,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the public URL is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl CatalogConfig {
    /// Load only the catalog backend settings.
    ///
    /// Used directly by the CLI, which does not need the server settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `CATALOG_GRAPHQL_URL` is missing or invalid,
    /// or if `CATALOG_ACCESS_TOKEN` looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            graphql_url: get_required_url("CATALOG_GRAPHQL_URL")?,
            access_token: get_optional_env("CATALOG_ACCESS_TOKEN")
                .map(|token| {
                    reject_weak_token(&token, "CATALOG_ACCESS_TOKEN")?;
                    Ok(SecretString::from(token))
                })
                .transpose()?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable that must parse as an absolute URL.
fn get_required_url(key: &str) -> Result<String, ConfigError> {
    let value = get_required_env(key)?;
    validate_url(&value, key)
}

fn validate_url(value: &str, key: &str) -> Result<String, ConfigError> {
    Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(value.trim_end_matches('/').to_string())
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value {
        Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}

/// Bits of Shannon entropy per character.
fn bits_per_char(token: &str) -> f64 {
    let mut chars: Vec<char> = token.chars().collect();
    if chars.is_empty() {
        return 0.0;
    }
    chars.sort_unstable();

    #[allow(clippy::cast_precision_loss)]
    let total = chars.len() as f64;
    chars
        .chunk_by(|a, b| a == b)
        .map(|run| {
            #[allow(clippy::cast_precision_loss)]
            let p = run.len() as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Reject access tokens that are copied placeholders or too repetitive to
/// have been generated.
fn reject_weak_token(token: &str, key: &str) -> Result<(), ConfigError> {
    let insecure = |reason: String| ConfigError::InsecureSecret(key.to_string(), reason);

    let lower = token.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(insecure(format!("looks like a placeholder ('{pattern}')")));
    }

    let bits = bits_per_char(token);
    if bits < MIN_TOKEN_BITS_PER_CHAR {
        return Err(insecure(format!(
            "only {bits:.2} bits/char of entropy, expected at least {MIN_TOKEN_BITS_PER_CHAR:.1}"
        )));
    }

    Ok(())
}
