//! Handler for the employee login endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
};

use crate::api::dto::login::LoginRequest;
use crate::domain::entities::SessionPayload;
use crate::error::AppError;
use crate::state::AppState;

/// Signs an employee in by employee code and password.
///
/// # Endpoint
///
/// `POST /login` (any non-`OPTIONS` method is treated the same way)
///
/// # Request Body
///
/// ```json
/// { "employee_code": "E1024", "password": "hunter2" }
/// ```
///
/// The body is parsed as JSON regardless of `Content-Type`. A body that cannot
/// be read (for example one over the request size limit) is reported like any
/// other failure.
///
/// # Response
///
/// **200 OK** with the identity provider's session payload, unchanged:
///
/// ```json
/// {
///   "user": { "id": "...", "email": "jane@corp.example" },
///   "session": { "access_token": "...", "refresh_token": "...", "expires_at": 1700000000 }
/// }
/// ```
///
/// # Errors
///
/// **400 Bad Request** with `{ "error": "<message>" }` when:
/// - The body cannot be read or is not valid JSON (underlying message)
/// - `employee_code` or `password` is missing or empty
/// - The employee code is unknown
/// - The identity provider rejects the credentials (provider message)
pub async fn login_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SessionPayload>, AppError> {
    let body = body.map_err(|rejection| AppError::unexpected(rejection.body_text()))?;
    let payload: LoginRequest = serde_json::from_slice(&body)?;
    let credentials = payload.into_credentials()?;

    let session = state.login_service.login(credentials).await?;

    Ok(Json(session))
}
