use employee_login::domain::providers::IdentityProvider;
use employee_login::domain::repositories::EmployeeRepository;
use employee_login::error::AppError;
use employee_login::infrastructure::SupabaseClient;
use employee_login::infrastructure::auth::GoTrueProvider;
use employee_login::infrastructure::persistence::RestEmployeeRepository;
use secrecy::SecretString;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_KEY: &str = "service-role-key";

fn client(server: &MockServer) -> Arc<SupabaseClient> {
    Arc::new(
        SupabaseClient::new(&server.uri(), SecretString::from(SERVICE_KEY.to_string())).unwrap(),
    )
}

#[tokio::test]
async fn test_directory_finds_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/employees"))
        .and(query_param("select", "email"))
        .and(query_param("employee_code", "eq.E1024"))
        .and(header("apikey", SERVICE_KEY))
        .and(header("authorization", "Bearer service-role-key"))
        .and(header("accept", "application/vnd.pgrst.object+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "jane@corp.example" })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = RestEmployeeRepository::new(client(&server), "employees");

    let email = repo.find_email_by_code("E1024").await.unwrap();

    assert_eq!(email.as_deref(), Some("jane@corp.example"));
}

#[tokio::test]
async fn test_directory_no_single_row_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/employees"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "details": "The result contains 0 rows",
            "message": "JSON object requested, multiple (or no) rows returned"
        })))
        .mount(&server)
        .await;

    let repo = RestEmployeeRepository::new(client(&server), "employees");

    assert_eq!(repo.find_email_by_code("E9999").await.unwrap(), None);
}

#[tokio::test]
async fn test_directory_uses_configured_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/staff"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "email": "ops@corp.example" })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = RestEmployeeRepository::new(client(&server), "staff");

    assert_eq!(
        repo.find_email_by_code("OPS1").await.unwrap().as_deref(),
        Some("ops@corp.example")
    );
}

#[tokio::test]
async fn test_directory_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repo = RestEmployeeRepository::new(client(&server), "employees");

    let err = repo.find_email_by_code("E1024").await.unwrap_err();

    assert!(matches!(err, AppError::Unexpected(_)));
}

#[tokio::test]
async fn test_sign_in_success() {
    let server = MockServer::start().await;

    let token = json!({
        "access_token": "at",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1704070800,
        "refresh_token": "rt",
        "user": { "id": "u-1", "email": "jane@corp.example" }
    });

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", SERVICE_KEY))
        .and(body_json(json!({ "email": "jane@corp.example", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = GoTrueProvider::new(client(&server));

    let payload = provider
        .sign_in_with_password("jane@corp.example", &SecretString::from("hunter2".to_string()))
        .await
        .unwrap();

    assert_eq!(payload, json!({ "user": token["user"], "session": token }));
}

#[tokio::test]
async fn test_sign_in_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "error_code": "invalid_credentials",
            "msg": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let provider = GoTrueProvider::new(client(&server));

    let err = provider
        .sign_in_with_password("jane@corp.example", &SecretString::from("wrong".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.to_string(), "Invalid login credentials");
}

#[tokio::test]
async fn test_sign_in_without_session_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": "u-1", "email": "jane@corp.example" })),
        )
        .mount(&server)
        .await;

    let provider = GoTrueProvider::new(client(&server));

    let err = provider
        .sign_in_with_password("jane@corp.example", &SecretString::from("hunter2".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
    assert_eq!(err.to_string(), "Auth session or user missing");
}

#[tokio::test]
async fn test_sign_in_unreachable() {
    let server = MockServer::start().await;
    let client = client(&server);
    drop(server);

    let provider = GoTrueProvider::new(client);

    let err = provider
        .sign_in_with_password("jane@corp.example", &SecretString::from("hunter2".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Authentication(_)));
}
