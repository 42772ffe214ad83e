//! Shared application state injected into handlers and middleware.

use anyhow::Result;
use std::sync::Arc;

use crate::api::middleware::cors::CorsHeaders;
use crate::application::services::LoginService;
use crate::config::Config;
use crate::infrastructure::SupabaseClient;
use crate::infrastructure::auth::GoTrueProvider;
use crate::infrastructure::persistence::RestEmployeeRepository;

/// Process-wide state, cloned cheaply into every request.
#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<LoginService>,
    pub cors: Arc<CorsHeaders>,
}

impl AppState {
    pub fn new(login_service: Arc<LoginService>, cors: CorsHeaders) -> Self {
        Self {
            login_service,
            cors: Arc::new(cors),
        }
    }

    /// Wires the Supabase-backed services from configuration.
    ///
    /// A single [`SupabaseClient`] is created here and shared by the directory
    /// and the identity provider for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the Supabase client or CORS headers cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let login_service = build_login_service(config)?;
        let cors = CorsHeaders::from_config(&config.cors)?;

        Ok(Self::new(Arc::new(login_service), cors))
    }
}

/// Builds a [`LoginService`] backed by the configured Supabase project.
pub fn build_login_service(config: &Config) -> Result<LoginService> {
    let client = Arc::new(SupabaseClient::from_config(config)?);

    let employees = Arc::new(RestEmployeeRepository::new(
        client.clone(),
        config.employees_table.clone(),
    ));
    let identity = Arc::new(GoTrueProvider::new(client));

    Ok(LoginService::new(employees, identity))
}
