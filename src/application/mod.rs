//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating repository and
//! provider calls. They consume domain traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::login_service::LoginService`] - Employee-code login

pub mod services;
