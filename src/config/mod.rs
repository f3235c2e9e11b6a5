#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::pdga::DEFAULT_BASE_URL;
use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use secrecy::SecretString;
use std::time::Duration;

pub const DEFAULT_TRIGGER: &str = "/pdga";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const MAX_TIMEOUT_SECONDS: u64 = 120;
pub const DEFAULT_USER_AGENT: &str = concat!("pdga-bot/", env!("CARGO_PKG_VERSION"));

/// Fully resolved bot configuration, handed to the handler and the fetcher.
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub token: Option<SecretString>,
    pub trigger: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            token: None,
            trigger: DEFAULT_TRIGGER.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BotSettings {
    /// Applies each layer over the defaults; later layers win.
    pub fn resolve<'a, I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a TomlConfig>,
    {
        let mut settings = Self::default();
        for layer in layers {
            settings.apply(layer);
        }
        settings
    }

    fn apply(&mut self, layer: &TomlConfig) {
        if let Some(token) = &layer.bot.token {
            self.token = Some(token.clone());
        }
        if let Some(trigger) = &layer.bot.trigger {
            self.trigger = trigger.clone();
        }
        if let Some(base_url) = &layer.source.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(timeout) = layer.source.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(user_agent) = &layer.source.user_agent {
            self.user_agent = user_agent.clone();
        }
    }

    /// Only the Discord transport needs the token.
    pub fn require_token(&self) -> Result<&SecretString> {
        validation::validate_required_field("bot.token", &self.token)
    }
}

impl ConfigProvider for BotSettings {
    fn trigger(&self) -> &str {
        &self.trigger
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for BotSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_single_token("bot.trigger", &self.trigger)?;
        validation::validate_url("source.base_url", &self.base_url)?;
        validation::validate_range(
            "source.timeout_seconds",
            self.timeout_seconds,
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
        validation::validate_non_empty_string("source.user_agent", &self.user_agent)?;
        Ok(())
    }
}
