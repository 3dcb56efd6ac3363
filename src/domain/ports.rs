use crate::domain::model::PostgrestResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 可以整張表查詢的資料來源
///
/// 查詢層級的錯誤放在 `PostgrestResponse::error`；
/// 傳輸、網址、解碼失敗才回傳 `Err`。
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn select_all(&self, table: &str, columns: &str) -> Result<PostgrestResponse>;
}
