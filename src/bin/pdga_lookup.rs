use anyhow::Context;
use clap::Parser;
use pdga_bot::core::command;
use pdga_bot::core::ProfileSource;
use pdga_bot::utils::{logger, validation::Validate};
use pdga_bot::{CliConfig, MessageHandler, PdgaProfileFetcher};

/// Runs one lookup without a chat session, e.g. `pdga-lookup 27523 info`.
#[derive(Parser)]
#[command(name = "pdga-lookup")]
#[command(about = "Look up a PDGA player the same way the bot does")]
struct Args {
    /// `<pdga-number> <info|predict_rating>`
    #[arg(required = true, num_args = 1..)]
    command: Vec<String>,

    /// Print the scraped profile as JSON instead of the chat reply
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    settings: CliConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.settings.verbose);

    let settings = args
        .settings
        .settings()
        .context("failed to load configuration")?;
    if let Err(e) = settings.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let fetcher = PdgaProfileFetcher::new(&settings).context("failed to set up HTTP client")?;
    let raw = args.command.join(" ");

    if args.json {
        let parsed = match command::parse(&raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("❌ {}", e);
                eprintln!("{}", command::usage("pdga-lookup"));
                std::process::exit(2);
            }
        };
        match fetcher.fetch(parsed.pdga_number).await {
            Ok(profile) => println!(
                "{}",
                serde_json::to_string_pretty(&profile).context("failed to encode profile")?
            ),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(2);
            }
        }
        return Ok(());
    }

    let handler = MessageHandler::new(fetcher, settings);
    println!("{}", handler.respond(&raw).await);

    Ok(())
}
