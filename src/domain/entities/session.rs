//! Session payload returned by the identity provider.

use serde_json::Value;

/// Opaque sign-in result (tokens, user record, expiry).
///
/// The login flow never inspects it; it is returned to the client exactly as
/// the identity provider produced it.
pub type SessionPayload = Value;
