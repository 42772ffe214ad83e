//! Login credentials entity.

use secrecy::SecretString;
use std::fmt;

/// A validated login attempt: an employee code and the password to check.
///
/// Only constructed after presence checks pass, so both fields are non-empty.
/// The password stays wrapped in [`SecretString`] until it is handed to the
/// identity provider.
pub struct Credentials {
    pub employee_code: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(employee_code: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            employee_code: employee_code.into(),
            password: SecretString::from(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("employee_code", &self.employee_code)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_credentials_new() {
        let credentials = Credentials::new("E1024", "hunter2");

        assert_eq!(credentials.employee_code, "E1024");
        assert_eq!(credentials.password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("E1024", "hunter2");
        let debug = format!("{credentials:?}");

        assert!(debug.contains("E1024"));
        assert!(!debug.contains("hunter2"));
    }
}
