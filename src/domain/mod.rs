//! Domain layer containing entities and the interfaces of external collaborators.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped data: credentials and session payloads
//! - [`repositories`] - Employee directory trait
//! - [`providers`] - Identity provider trait
//!
//! # Login Flow
//!
//! 1. HTTP handler turns the request body into [`entities::Credentials`]
//! 2. [`repositories::EmployeeRepository`] resolves the employee code to an email
//! 3. [`providers::IdentityProvider`] signs in with that email and the password
//! 4. The resulting [`entities::SessionPayload`] goes back to the client untouched

pub mod entities;
pub mod providers;
pub mod repositories;
