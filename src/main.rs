use clap::Parser;
use supabase_profiles::core::profiles::rows_or_empty;
use supabase_profiles::utils::{logger, validation::Validate};
use supabase_profiles::{CliConfig, SupabaseClient, TableSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting supabase-profiles CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let (_, role) = settings.supabase.preferred_key();
    tracing::info!("Using {} key against {}", role, settings.supabase.url);

    let client = SupabaseClient::from_config(&settings.supabase);

    match client.select_all(&settings.table, &settings.columns).await {
        Ok(response) => {
            let failed = response.is_error();
            let rows = rows_or_empty(&settings.table, response);

            tracing::info!("📁 Fetched {} rows from {}", rows.len(), settings.table);
            println!("{}", serde_json::to_string_pretty(&rows)?);

            if failed {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    }

    Ok(())
}
