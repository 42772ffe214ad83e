//! Core domain entities.
//!
//! - [`Credentials`] - A validated employee-code/password pair
//! - [`SessionPayload`] - The identity provider's opaque sign-in result
//!
//! Both are request-scoped; nothing here is persisted by this service.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::SessionPayload;
