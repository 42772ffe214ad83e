//! Interfaces to external services the domain depends on.

pub mod identity_provider;

pub use identity_provider::IdentityProvider;

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
