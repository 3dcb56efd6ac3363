use crate::config::env::SupabaseConfig;
use crate::core::profiles::PROFILES_TABLE;
use crate::utils::error::{Result, SupabaseError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub supabase: SupabaseConfig,
    pub query: Option<QueryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub table: Option<String>,
    pub columns: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, |name| std::env::var(name).ok())?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換 `${VAR_NAME}`；找不到的變數換成空字串，
    /// 讓缺少的 service role key 和沒寫一樣
    fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SupabaseError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| {
                tracing::warn!("Environment variable {} is not set", var_name);
                String::new()
            })
        });

        Ok(result.into_owned())
    }

    pub fn table(&self) -> &str {
        self.query
            .as_ref()
            .and_then(|q| q.table.as_deref())
            .unwrap_or(PROFILES_TABLE)
    }

    pub fn columns(&self) -> &str {
        self.query
            .as_ref()
            .and_then(|q| q.columns.as_deref())
            .unwrap_or("*")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.supabase.validate()?;
        validate_non_empty_string("query.table", self.table())?;
        validate_non_empty_string("query.columns", self.columns())
    }
}
