//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer on top of a
//! Supabase project.
//!
//! # Modules
//!
//! - [`supabase`] - Shared privileged client handle
//! - [`persistence`] - Employee directory over PostgREST
//! - [`auth`] - Identity provider over Supabase Auth (GoTrue)

pub mod auth;
pub mod persistence;
pub mod supabase;

pub use supabase::SupabaseClient;
