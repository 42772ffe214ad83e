#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use employee_login::api::middleware::cors::CorsHeaders;
use employee_login::prelude::*;
use employee_login::routes::api_router;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const EMPLOYEE_CODE: &str = "E1024";
pub const EMAIL: &str = "jane@corp.example";
pub const PASSWORD: &str = "hunter2";

/// In-memory directory; `failing()` simulates an unreachable backend.
pub struct StaticDirectory {
    employees: HashMap<String, String>,
    fail: bool,
}

impl StaticDirectory {
    pub fn with_employee(code: &str, email: &str) -> Self {
        Self {
            employees: HashMap::from([(code.to_string(), email.to_string())]),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            employees: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl EmployeeRepository for StaticDirectory {
    async fn find_email_by_code(&self, employee_code: &str) -> Result<Option<String>, AppError> {
        if self.fail {
            return Err(AppError::unexpected("directory unavailable"));
        }
        Ok(self.employees.get(employee_code).cloned())
    }
}

/// Accepts one email/password pair and counts sign-in calls.
pub struct StaticProvider {
    email: String,
    password: String,
    calls: AtomicUsize,
}

impl StaticProvider {
    pub fn accepting(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for StaticProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SessionPayload, AppError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;

        if email != self.email || password.expose_secret() != self.password {
            return Err(AppError::authentication("Invalid login credentials"));
        }

        Ok(session_for(email, n))
    }
}

/// Session payload the fake provider returns for its `n`-th call.
pub fn session_for(email: &str, n: usize) -> Value {
    json!({
        "user": { "id": "0b6f2c1e", "email": email, "aud": "authenticated" },
        "session": {
            "access_token": format!("access-{n}"),
            "token_type": "bearer",
            "expires_in": 3600,
            "expires_at": 1704070800,
            "refresh_token": format!("refresh-{n}"),
            "user": { "id": "0b6f2c1e", "email": email }
        }
    })
}

pub fn create_test_state(
    directory: impl EmployeeRepository + 'static,
    provider: Arc<StaticProvider>,
) -> AppState {
    let login_service = LoginService::new(Arc::new(directory), provider);
    AppState::new(Arc::new(login_service), CorsHeaders::default())
}

/// Server with one known employee whose password is [`PASSWORD`].
pub fn create_test_server() -> (TestServer, Arc<StaticProvider>) {
    let provider = Arc::new(StaticProvider::accepting(EMAIL, PASSWORD));
    let state = create_test_state(
        StaticDirectory::with_employee(EMPLOYEE_CODE, EMAIL),
        provider.clone(),
    );

    (TestServer::new(api_router(state)).unwrap(), provider)
}
