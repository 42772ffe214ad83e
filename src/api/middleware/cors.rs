//! Cross-origin headers and pre-flight handling.

use axum::{
    extract::{Request, State},
    http::{
        HeaderMap, HeaderValue, Method, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::CorsConfig;
use crate::state::AppState;

/// Pre-parsed CORS header values.
#[derive(Debug, Clone)]
pub struct CorsHeaders {
    allow_origin: HeaderValue,
    allow_headers: HeaderValue,
    allow_methods: HeaderValue,
}

impl CorsHeaders {
    /// Parses configured values into header values.
    ///
    /// # Errors
    ///
    /// Returns an error if any value contains characters not allowed in a header.
    pub fn from_config(
        config: &CorsConfig,
    ) -> Result<Self, axum::http::header::InvalidHeaderValue> {
        Ok(Self {
            allow_origin: HeaderValue::from_str(&config.allow_origin)?,
            allow_headers: HeaderValue::from_str(&config.allow_headers)?,
            allow_methods: HeaderValue::from_str(&config.allow_methods)?,
        })
    }

    /// Inserts the CORS headers, replacing any existing values.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.allow_origin.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.allow_headers.clone());
        headers.insert(ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods.clone());
    }
}

impl Default for CorsHeaders {
    fn default() -> Self {
        Self {
            allow_origin: HeaderValue::from_static(crate::config::DEFAULT_ALLOW_ORIGIN),
            allow_headers: HeaderValue::from_static(crate::config::DEFAULT_ALLOW_HEADERS),
            allow_methods: HeaderValue::from_static(crate::config::DEFAULT_ALLOW_METHODS),
        }
    }
}

/// Answers pre-flight requests and adds CORS headers to every response.
///
/// `OPTIONS` requests never reach a handler: they get `200 OK` with body `ok`.
/// All other responses, errors included, leave with the configured headers.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/login", any(login_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), cors::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        (StatusCode::OK, "ok").into_response()
    } else {
        next.run(req).await
    };

    st.cors.apply(response.headers_mut());

    response
}
