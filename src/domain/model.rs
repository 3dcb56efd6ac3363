use serde::{Deserialize, Serialize};

/// 伺服器回傳的一列資料，原樣保留
pub type Row = serde_json::Value;

/// PostgREST 的錯誤回應本體
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }
}

/// 一次查詢的結果：data 與 error 直接來自伺服器，不做加工
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostgrestResponse {
    pub data: Option<Vec<Row>>,
    pub error: Option<PostgrestError>,
    pub status: u16,
}

impl PostgrestResponse {
    pub fn ok(rows: Vec<Row>) -> Self {
        Self {
            data: Some(rows),
            error: None,
            status: 200,
        }
    }

    pub fn failed(status: u16, error: PostgrestError) -> Self {
        Self {
            data: None,
            error: Some(error),
            status,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// 使用中的金鑰種類，決定了連線的權限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRole {
    ServiceRole,
    Anon,
}

impl std::fmt::Display for KeyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyRole::ServiceRole => write!(f, "service_role"),
            KeyRole::Anon => write!(f, "anon"),
        }
    }
}
