//! Login service: employee code → email → identity provider sign-in.

use std::sync::Arc;

use crate::domain::entities::{Credentials, SessionPayload};
use crate::domain::providers::IdentityProvider;
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// Authenticates employees by their employee code.
///
/// Holds shared handles to the directory and the identity provider; one
/// instance serves every request for the lifetime of the process.
pub struct LoginService {
    employees: Arc<dyn EmployeeRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl LoginService {
    /// Creates a new login service.
    pub fn new(employees: Arc<dyn EmployeeRepository>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            employees,
            identity,
        }
    }

    /// Resolves an employee code to the email registered in the directory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Lookup`] ("Invalid employee code.") if the code is
    /// unknown or the directory query fails. The underlying cause is logged,
    /// not returned.
    pub async fn resolve_email(&self, employee_code: &str) -> Result<String, AppError> {
        match self.employees.find_email_by_code(employee_code).await {
            Ok(Some(email)) => Ok(email),
            Ok(None) => {
                tracing::warn!(employee_code, "Employee code not found");
                Err(AppError::invalid_employee_code())
            }
            Err(e) => {
                tracing::warn!(employee_code, error = %e, "Employee directory lookup failed");
                Err(AppError::invalid_employee_code())
            }
        }
    }

    /// Signs an employee in and returns the identity provider's session payload.
    ///
    /// # Flow
    ///
    /// 1. Resolve `employee_code` to an email via the directory
    /// 2. Call the identity provider's password sign-in with that email
    /// 3. Return its payload unchanged
    ///
    /// # Errors
    ///
    /// - [`AppError::Lookup`] if the employee code cannot be resolved
    /// - [`AppError::Authentication`] with the provider's message if sign-in fails
    pub async fn login(&self, credentials: Credentials) -> Result<SessionPayload, AppError> {
        let email = self.resolve_email(&credentials.employee_code).await?;

        let session = self
            .identity
            .sign_in_with_password(&email, &credentials.password)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    employee_code = %credentials.employee_code,
                    kind = e.kind(),
                    error = %e,
                    "Sign-in rejected"
                );
            })?;

        tracing::info!(employee_code = %credentials.employee_code, "Employee signed in");

        Ok(session)
    }
}
