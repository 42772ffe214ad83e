//! PostgREST implementation of the employee directory.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::infrastructure::supabase::SupabaseClient;

/// Asks PostgREST for exactly one object instead of an array.
///
/// Zero or several matching rows make the server answer `406 Not Acceptable`.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    email: String,
}

/// Directory repository backed by the Supabase REST API.
///
/// Issues `GET /rest/v1/{table}?select=email&employee_code=eq.{code}` with the
/// service-role key.
pub struct RestEmployeeRepository {
    client: Arc<SupabaseClient>,
    table: String,
}

impl RestEmployeeRepository {
    /// Creates a new repository reading from `table`.
    pub fn new(client: Arc<SupabaseClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl EmployeeRepository for RestEmployeeRepository {
    async fn find_email_by_code(&self, employee_code: &str) -> Result<Option<String>, AppError> {
        let url = self.client.endpoint(&format!("rest/v1/{}", self.table))?;

        let response = self
            .client
            .get(url)
            .header("Accept", SINGLE_OBJECT)
            .query(&[
                ("select", "email".to_string()),
                ("employee_code", format!("eq.{employee_code}")),
            ])
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let row: EmployeeRow = response.json().await?;
                Ok(Some(row.email))
            }
            StatusCode::NOT_ACCEPTABLE => Ok(None),
            status => {
                let body = response.text().await.unwrap_or_default();
                tracing::debug!(%status, %body, "Directory query rejected");
                Err(AppError::unexpected(format!(
                    "Directory query failed with status {status}"
                )))
            }
        }
    }
}
