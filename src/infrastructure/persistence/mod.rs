//! Employee directory implementations.
//!
//! - [`RestEmployeeRepository`] - Supabase PostgREST (`/rest/v1`)

pub mod rest_employee_repository;

pub use rest_employee_repository::RestEmployeeRepository;
