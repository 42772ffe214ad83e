//! Repository trait for the employee directory.

use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the employee directory (`employee_code → email`).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RestEmployeeRepository`] - Supabase PostgREST implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Finds the email address registered for an employee code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(email))` if exactly one employee has this code
    /// - `Ok(None)` if no employee, or more than one, has this code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unexpected`] if the directory cannot be queried.
    async fn find_email_by_code(&self, employee_code: &str) -> Result<Option<String>, AppError>;
}
