use crate::core::{PostgrestError, PostgrestResponse, Row, TableSource};
use crate::utils::error::Result;

pub const PROFILES_TABLE: &str = "profiles";

/// 讀取 `profiles` 整張表
///
/// 查詢失敗時記錄錯誤並回傳空的 `Vec`；連線或解碼失敗仍以 `Err` 回傳。
pub async fn fetch_profiles<S>(source: &S) -> Result<Vec<Row>>
where
    S: TableSource + ?Sized,
{
    fetch_all(source, PROFILES_TABLE).await
}

pub async fn fetch_all<S>(source: &S, table: &str) -> Result<Vec<Row>>
where
    S: TableSource + ?Sized,
{
    let response = source.select_all(table, "*").await?;
    Ok(rows_or_empty(table, response))
}

pub fn rows_or_empty(table: &str, response: PostgrestResponse) -> Vec<Row> {
    match response.error {
        Some(error) => {
            tracing::error!(status = response.status, "{}", fetch_error_message(table, &error));
            Vec::new()
        }
        None => response.data.unwrap_or_default(),
    }
}

pub fn fetch_error_message(table: &str, error: &PostgrestError) -> String {
    format!("Error fetching {}: {}", table, error)
}
