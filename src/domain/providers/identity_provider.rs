//! Trait for the external identity provider.

use crate::domain::entities::SessionPayload;
use crate::error::AppError;
use async_trait::async_trait;
use secrecy::SecretString;

/// Password-based sign-in against an external identity provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::GoTrueProvider`] - Supabase Auth (GoTrue)
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies `password` for the account registered under `email`.
    ///
    /// Every call performs a fresh sign-in; results are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Authentication`] with the provider's message when the
    /// credentials are rejected or the provider cannot be reached, and
    /// [`AppError::Unexpected`] when the provider answers with an unreadable payload.
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SessionPayload, AppError>;
}
