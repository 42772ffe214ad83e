//! Shared handle to a Supabase project.
//!
//! Built once at startup and shared by the directory repository and the
//! identity provider, so both reuse one connection pool and one copy of the
//! service-role key.

use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::config::Config;
use crate::error::AppError;

/// Privileged Supabase client: base URL, service-role key, pooled HTTP client.
pub struct SupabaseClient {
    http: Client,
    base_url: Url,
    service_role_key: SecretString,
}

impl SupabaseClient {
    /// Creates a client for the project at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` does not parse or the HTTP client cannot be built.
    pub fn new(base_url: &str, service_role_key: SecretString) -> anyhow::Result<Self> {
        // `Url::join` replaces the last path segment unless the base ends with '/'.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };

        let http = Client::builder()
            .user_agent(concat!("employee-login/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            service_role_key,
        })
    }

    /// Creates a client from the validated service configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let key = SecretString::from(config.service_role_key.expose_secret().to_string());
        Self::new(&config.supabase_url, key)
    }

    /// Resolves a path such as `auth/v1/token` against the project URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Ok(self.base_url.join(path)?)
    }

    /// Starts a `GET` request carrying the service-role credentials.
    pub fn get(&self, url: Url) -> RequestBuilder {
        self.authorize(self.http.get(url))
    }

    /// Starts a `POST` request carrying the service-role credentials.
    pub fn post(&self, url: Url) -> RequestBuilder {
        self.authorize(self.http.post(url))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let key = self.service_role_key.expose_secret();
        request.header("apikey", key).bearer_auth(key)
    }
}
