//! DTOs for the login endpoint.

use serde::Deserialize;
use std::fmt;
use validator::Validate;

use crate::domain::entities::Credentials;
use crate::error::AppError;

/// Request body of `POST /login`.
///
/// Fields are optional at the parsing stage so that a missing field produces
/// the same client message as an empty one.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub employee_code: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Checks both fields are present and non-empty and converts into [`Credentials`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] ("Employee code and password are required.")
    /// if either field is missing or empty.
    pub fn into_credentials(self) -> Result<Credentials, AppError> {
        self.validate()
            .map_err(|_| AppError::missing_credentials())?;

        match (self.employee_code, self.password) {
            (Some(employee_code), Some(password)) => Ok(Credentials::new(employee_code, password)),
            _ => Err(AppError::missing_credentials()),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("employee_code", &self.employee_code)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
