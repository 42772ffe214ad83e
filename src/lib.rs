//! # Employee Login
//!
//! Employee-code login in front of Supabase Auth, built with Axum.
//!
//! Staff sign in with an employee code instead of an email address. The
//! service resolves the code to an email through the employee directory,
//! then delegates password verification to Supabase Auth and returns its
//! session payload untouched.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and collaborator traits
//! - **Application Layer** ([`application`]) - Login orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Supabase REST and Auth clients
//! - **API Layer** ([`api`]) - Handlers, DTOs, CORS and tracing middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export SUPABASE_URL="https://project.supabase.co"
//! export SUPABASE_SERVICE_ROLE_KEY="eyJhbGciOi..."
//!
//! cargo run
//!
//! curl -X POST localhost:3000/login \
//!   -d '{"employee_code":"E1024","password":"hunter2"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LoginService;
    pub use crate::domain::entities::{Credentials, SessionPayload};
    pub use crate::domain::providers::IdentityProvider;
    pub use crate::domain::repositories::EmployeeRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
