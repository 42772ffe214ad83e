//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Nothing else in the crate reads the environment; the values flow from here
//! into [`crate::state::AppState`] and the upstream clients.
//!
//! ```bash
//! export SUPABASE_URL="https://project.supabase.co"
//! export SUPABASE_SERVICE_ROLE_KEY="eyJhbGciOi..."
//! ```
//!
//! ## Required Variables
//!
//! - `SUPABASE_URL` - Base URL of the Supabase project (`http://` or `https://`)
//! - `SUPABASE_SERVICE_ROLE_KEY` - Privileged key used for directory lookups and sign-in
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `EMPLOYEES_TABLE` - Directory table holding `employee_code` and `email` (default: `employees`)
//! - `CORS_ALLOW_ORIGIN` - `Access-Control-Allow-Origin` value (default: `*`)
//! - `CORS_ALLOW_HEADERS` - `Access-Control-Allow-Headers` value
//!   (default: `authorization, x-client-info, apikey, content-type`)
//! - `CORS_ALLOW_METHODS` - `Access-Control-Allow-Methods` value (default: `POST, OPTIONS`)

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use std::env;
use url::Url;

pub const DEFAULT_ALLOW_ORIGIN: &str = "*";
pub const DEFAULT_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const DEFAULT_ALLOW_METHODS: &str = "POST, OPTIONS";

/// Cross-origin header values attached to every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_headers: String,
    pub allow_methods: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
            allow_headers: DEFAULT_ALLOW_HEADERS.to_string(),
            allow_methods: DEFAULT_ALLOW_METHODS.to_string(),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug)]
pub struct Config {
    pub supabase_url: String,
    /// Service-role key. Grants read access to the directory table, so it is
    /// never printed or logged.
    pub service_role_key: SecretString,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub employees_table: String,
    pub cors: CorsConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUPABASE_URL` or `SUPABASE_SERVICE_ROLE_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let supabase_url = env::var("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY")
            .map(SecretString::from)
            .context("SUPABASE_SERVICE_ROLE_KEY must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let employees_table =
            env::var("EMPLOYEES_TABLE").unwrap_or_else(|_| "employees".to_string());

        let cors = CorsConfig {
            allow_origin: env::var("CORS_ALLOW_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.to_string()),
            allow_headers: env::var("CORS_ALLOW_HEADERS")
                .unwrap_or_else(|_| DEFAULT_ALLOW_HEADERS.to_string()),
            allow_methods: env::var("CORS_ALLOW_METHODS")
                .unwrap_or_else(|_| DEFAULT_ALLOW_METHODS.to_string()),
        };

        Ok(Self {
            supabase_url,
            service_role_key,
            listen_addr,
            log_level,
            log_format,
            employees_table,
            cors,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `supabase_url` is not an absolute `http`/`https` URL
    /// - `service_role_key` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `employees_table` is not a plain identifier
    /// - a CORS value is not a valid header value
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.supabase_url)
            .with_context(|| format!("SUPABASE_URL is not a valid URL: '{}'", self.supabase_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "SUPABASE_URL must start with 'http://' or 'https://', got '{}'",
                self.supabase_url
            );
        }

        if self.service_role_key.expose_secret().trim().is_empty() {
            anyhow::bail!("SUPABASE_SERVICE_ROLE_KEY must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Goes into a PostgREST path segment.
        if self.employees_table.is_empty()
            || !self
                .employees_table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            anyhow::bail!(
                "EMPLOYEES_TABLE must contain only letters, digits and '_', got '{}'",
                self.employees_table
            );
        }

        for (name, value) in [
            ("CORS_ALLOW_ORIGIN", &self.cors.allow_origin),
            ("CORS_ALLOW_HEADERS", &self.cors.allow_headers),
            ("CORS_ALLOW_METHODS", &self.cors.allow_methods),
        ] {
            HeaderValue::from_str(value)
                .with_context(|| format!("{name} is not a valid header value: '{value}'"))?;
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Supabase URL: {}", self.supabase_url);
        tracing::info!(
            "  Service role key: {}",
            mask_secret(self.service_role_key.expose_secret())
        );
        tracing::info!("  Employees table: {}", self.employees_table);
        tracing::info!("  CORS origin: {}", self.cors.allow_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for display, keeping only a short prefix.
///
/// - `eyJhbGciOiJIUzI1NiJ9.payload` → `eyJh***`
/// - `short` → `***`
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
