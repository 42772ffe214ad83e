//! Identity provider implementations.

pub mod gotrue_provider;

pub use gotrue_provider::GoTrueProvider;
