//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into application calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and request tracing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
