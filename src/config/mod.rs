pub mod env;
pub mod toml_config;

pub use env::SupabaseConfig;
pub use toml_config::TomlConfig;

use crate::core::profiles::PROFILES_TABLE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "supabase-profiles")]
#[command(about = "Dump the rows of a Supabase table as JSON")]
pub struct CliConfig {
    #[arg(long, help = "Table to read [default: profiles]")]
    pub table: Option<String>,

    #[arg(long, help = "Columns for the select parameter [default: *]")]
    pub columns: Option<String>,

    #[arg(long, help = "TOML file with a [supabase] section; the environment is used when omitted")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// 執行一次查詢所需的全部設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub supabase: SupabaseConfig,
    pub table: String,
    pub columns: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            supabase: SupabaseConfig::from_env(),
            table: PROFILES_TABLE.to_string(),
            columns: "*".to_string(),
        }
    }
}

impl From<TomlConfig> for Settings {
    fn from(config: TomlConfig) -> Self {
        Self {
            table: config.table().to_string(),
            columns: config.columns().to_string(),
            supabase: config.supabase,
        }
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 有 --config 就讀檔（命令列指定的 table/columns 優先），否則讀環境變數
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path.display());
                Settings::from(TomlConfig::from_file(path)?)
            }
            None => Settings::from_env(),
        };

        if let Some(table) = &self.table {
            settings.table = table.clone();
        }
        if let Some(columns) = &self.columns {
            settings.columns = columns.clone();
        }

        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.supabase.validate()?;
        validate_non_empty_string("table", &self.table)?;
        validate_non_empty_string("columns", &self.columns)
    }
}
