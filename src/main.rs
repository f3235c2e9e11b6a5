use clap::Parser;
use pdga_bot::adapters::discord;
use pdga_bot::utils::error::{BotError, ErrorSeverity};
use pdga_bot::utils::{logger, validation::Validate};
use pdga_bot::{CliConfig, MessageHandler, PdgaProfileFetcher};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pdga-bot");

    // 載入並驗證配置，token 缺少屬於啟動期致命錯誤
    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };
    let token = match settings.require_token() {
        Ok(token) => token.clone(),
        Err(e) => {
            eprintln!("💡 Set the DISCORD_TOKEN environment variable or pass --token");
            exit_with(e)
        }
    };

    if cli.verbose {
        tracing::debug!(
            trigger = %settings.trigger,
            base_url = %settings.base_url,
            timeout_seconds = settings.timeout_seconds,
            "Resolved settings"
        );
    }

    let fetcher = match PdgaProfileFetcher::new(&settings) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_with(e),
    };
    let handler = MessageHandler::new(fetcher, settings);

    if let Err(e) = discord::run(&token, handler).await {
        exit_with(e);
    }

    Ok(())
}

fn exit_with(e: BotError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
