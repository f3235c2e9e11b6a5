use crate::utils::error::{BotError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub bot: BotSection,
    #[serde(default)]
    pub source: SourceSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotSection {
    pub token: Option<secrecy::SecretString>,
    pub trigger: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BotError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BotError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DISCORD_TOKEN})，找不到的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BotError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[bot]
token = "abc.def"
trigger = "!pdga"

[source]
base_url = "https://example.com/player/"
timeout_seconds = 5
user_agent = "custom-agent"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bot.token.unwrap().expose_secret(), "abc.def");
        assert_eq!(config.bot.trigger.as_deref(), Some("!pdga"));
        assert_eq!(
            config.source.base_url.as_deref(),
            Some("https://example.com/player/")
        );
        assert_eq!(config.source.timeout_seconds, Some(5));
        assert_eq!(config.source.user_agent.as_deref(), Some("custom-agent"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.bot.token.is_none());
        assert!(config.source.base_url.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PDGA_BOT_TEST_TRIGGER", "!disc");

        let toml_content = r#"
[bot]
trigger = "${PDGA_BOT_TEST_TRIGGER}"
token = "${PDGA_BOT_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.bot.trigger.as_deref(), Some("!disc"));
        assert_eq!(
            config.bot.token.unwrap().expose_secret(),
            "${PDGA_BOT_TEST_UNSET_VARIABLE}"
        );

        std::env::remove_var("PDGA_BOT_TEST_TRIGGER");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let toml_content = r#"
[source]
endpoint = "https://example.com"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(BotError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\ntimeout_seconds = 30\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.source.timeout_seconds, Some(30));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here/pdga-bot.toml").unwrap_err();
        assert!(err.to_string().contains("pdga-bot.toml"));
    }
}
