//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod employee_repository;

pub use employee_repository::EmployeeRepository;

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
