use crate::domain::model::KeyRole;
use crate::utils::error::Result;
use crate::utils::validation::{validate_api_key, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const URL_VARS: &[&str] = &["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
pub const SERVICE_ROLE_KEY_VARS: &[&str] = &["SUPABASE_SERVICE_ROLE_KEY"];
pub const ANON_KEY_VARS: &[&str] = &["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];

/// Supabase 連線憑證
///
/// 載入時不做驗證：缺少的變數會變成空字串，錯誤留到第一次請求才出現。
/// 需要提早失敗時呼叫 [`Validate::validate`]。
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    #[serde(default)]
    pub service_role_key: Option<String>,
    #[serde(default)]
    pub anon_key: String,
}

impl SupabaseConfig {
    pub fn new(
        url: impl Into<String>,
        service_role_key: Option<String>,
        anon_key: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            service_role_key,
            anon_key: anon_key.into(),
        }
    }

    /// 從行程環境變數載入
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 以任意查詢函式載入，規則與 [`SupabaseConfig::from_env`] 相同
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: first_non_empty(&lookup, URL_VARS).unwrap_or_default(),
            service_role_key: first_non_empty(&lookup, SERVICE_ROLE_KEY_VARS),
            anon_key: first_non_empty(&lookup, ANON_KEY_VARS).unwrap_or_default(),
        }
    }

    /// 有 service role key 就用它，否則退回 anon key
    pub fn preferred_key(&self) -> (&str, KeyRole) {
        match self.service_role_key.as_deref() {
            Some(key) if !key.is_empty() => (key, KeyRole::ServiceRole),
            _ => (self.anon_key.as_str(), KeyRole::Anon),
        }
    }

    pub fn has_service_role_key(&self) -> bool {
        self.preferred_key().1 == KeyRole::ServiceRole
    }
}

fn first_non_empty<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|&name| lookup(name))
        .find(|value| !value.is_empty())
}

impl std::fmt::Debug for SupabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseConfig")
            .field("url", &self.url)
            .field(
                "service_role_key",
                &self.service_role_key.as_ref().map(|_| "<redacted>"),
            )
            .field("anon_key", &if self.anon_key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

impl Validate for SupabaseConfig {
    fn validate(&self) -> Result<()> {
        validate_url("SUPABASE_URL", &self.url)?;

        let field = match self.preferred_key().1 {
            KeyRole::ServiceRole => "SUPABASE_SERVICE_ROLE_KEY",
            KeyRole::Anon => "SUPABASE_ANON_KEY",
        };
        validate_api_key(field, self.preferred_key().0)
    }
}
