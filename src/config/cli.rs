use crate::config::toml_config::{BotSection, SourceSection, TomlConfig};
use crate::config::BotSettings;
use crate::utils::error::Result;
use clap::Parser;
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "pdga-bot")]
#[command(about = "Discord bot that looks up PDGA player profiles")]
pub struct CliConfig {
    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command prefix that addresses the bot (default: /pdga)
    #[arg(long)]
    pub trigger: Option<String>,

    /// Player page base URL; the PDGA number is appended
    #[arg(long)]
    pub base_url: Option<String>,

    /// Profile request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// User-Agent header sent to the PDGA website
    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Command-line flags as a config layer; unset flags leave lower layers alone.
    pub fn as_layer(&self) -> TomlConfig {
        TomlConfig {
            bot: BotSection {
                token: self.token.clone().map(SecretString::new),
                trigger: self.trigger.clone(),
            },
            source: SourceSection {
                base_url: self.base_url.clone(),
                timeout_seconds: self.timeout_seconds,
                user_agent: self.user_agent.clone(),
            },
        }
    }

    /// Defaults, then the config file (if any), then flags.
    pub fn settings(&self) -> Result<BotSettings> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        let flags = self.as_layer();
        Ok(BotSettings::resolve(file.iter().chain(std::iter::once(&flags))))
    }
}
