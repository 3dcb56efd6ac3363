use crate::core::client::SupabaseClient;
use crate::core::{PostgrestError, PostgrestResponse, Row};
use crate::utils::error::Result;

pub struct QueryBuilder<'a> {
    client: &'a SupabaseClient,
    table: String,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a SupabaseClient, table: &str) -> Self {
        Self {
            client,
            table: table.to_string(),
        }
    }

    pub fn select(self, columns: &str) -> SelectQuery<'a> {
        SelectQuery {
            client: self.client,
            table: self.table,
            columns: columns.to_string(),
        }
    }
}

pub struct SelectQuery<'a> {
    client: &'a SupabaseClient,
    table: String,
    columns: String,
}

impl SelectQuery<'_> {
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &str {
        &self.columns
    }

    /// 送出查詢
    ///
    /// 伺服器回報的錯誤放進 `error`，不會變成 `Err`。
    pub async fn execute(self) -> Result<PostgrestResponse> {
        let url = self.client.rest_url(&self.table, &self.columns)?;
        let api_key = self.client.api_key();

        tracing::debug!("Making PostgREST request to: {}", url);
        let response = self
            .client
            .http
            .get(url)
            .header("apikey", api_key)
            .bearer_auth(api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("PostgREST response status: {}", status);

        let body = response.bytes().await?;

        if status.is_success() {
            let rows: Vec<Row> = serde_json::from_slice(&body)?;
            tracing::debug!("Received {} rows from {}", rows.len(), self.table);
            return Ok(PostgrestResponse {
                data: Some(rows),
                error: None,
                status: status.as_u16(),
            });
        }

        // PostgREST 的錯誤通常是 JSON；不是的話就用原始內容當訊息
        let error = serde_json::from_slice::<PostgrestError>(&body).unwrap_or_else(|_| {
            let text = String::from_utf8_lossy(&body).trim().to_string();
            if text.is_empty() {
                PostgrestError::new(status.canonical_reason().unwrap_or("Request failed"))
            } else {
                PostgrestError::new(text)
            }
        });

        Ok(PostgrestResponse::failed(status.as_u16(), error))
    }
}
