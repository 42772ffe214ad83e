//! Supabase Auth (GoTrue) implementation of the identity provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value, json};
use std::sync::Arc;

use crate::domain::entities::SessionPayload;
use crate::domain::providers::IdentityProvider;
use crate::error::AppError;
use crate::infrastructure::supabase::SupabaseClient;

/// Identity provider calling `POST /auth/v1/token?grant_type=password`.
///
/// The success payload has the same shape Supabase's own client libraries
/// return from `signInWithPassword`:
///
/// ```json
/// {
///   "user": { "id": "...", "email": "..." },
///   "session": { "access_token": "...", "refresh_token": "...", "expires_at": 1700000000, "user": { ... } }
/// }
/// ```
pub struct GoTrueProvider {
    client: Arc<SupabaseClient>,
}

impl GoTrueProvider {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for GoTrueProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SessionPayload, AppError> {
        let url = self.client.endpoint("auth/v1/token")?;

        let response = self
            .client
            .post(url)
            .query(&[("grant_type", "password")])
            .json(&json!({
                "email": email,
                "password": password.expose_secret(),
            }))
            .send()
            .await
            .map_err(|e| AppError::authentication(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::authentication(error_message(status, &body)));
        }

        let token: Value = response.json().await?;

        session_payload(token, Utc::now())
    }
}

/// Extracts the human-readable message from a GoTrue error response.
///
/// GoTrue has used several error shapes across versions, so fields are tried
/// in order: `msg`, `message`, `error_description`, `error`. A JSON body with
/// none of them is returned serialized; a non-JSON body yields the status reason.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string());
    };

    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|field| value.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Message used when a successful sign-in response lacks tokens or a user.
pub(crate) const SESSION_OR_USER_MISSING: &str = "Auth session or user missing";

/// Wraps a GoTrue token response into the `{ user, session }` envelope.
///
/// Fills `session.expires_at` from `expires_in` when the server left it out,
/// `null` or `0`, and surfaces `weak_password` as `weakPassword`.
///
/// # Errors
///
/// Returns [`AppError::Authentication`] if the response has no `access_token`
/// or no `user`.
pub(crate) fn session_payload(
    token: Value,
    now: DateTime<Utc>,
) -> Result<SessionPayload, AppError> {
    let mut session = token;

    let Some(fields) = session.as_object_mut() else {
        return Err(AppError::authentication(SESSION_OR_USER_MISSING));
    };

    let has_access_token = fields.get("access_token").is_some_and(|v| !v.is_null());
    let user = fields.get("user").filter(|v| v.is_object()).cloned();
    let Some(user) = user.filter(|_| has_access_token) else {
        return Err(AppError::authentication(SESSION_OR_USER_MISSING));
    };

    let expires_at_unset = fields
        .get("expires_at")
        .is_none_or(|v| v.is_null() || v.as_i64() == Some(0));
    if expires_at_unset
        && let Some(expires_in) = fields.get("expires_in").and_then(Value::as_i64)
    {
        fields.insert("expires_at".to_string(), json!(now.timestamp() + expires_in));
    }

    let weak_password = fields
        .get("weak_password")
        .filter(|v| !v.is_null())
        .cloned();

    let mut payload = Map::new();
    payload.insert("user".to_string(), user);
    payload.insert("session".to_string(), session);
    if let Some(weak_password) = weak_password {
        payload.insert("weakPassword".to_string(), weak_password);
    }

    Ok(Value::Object(payload))
}
