use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    // 指令解析錯誤 (使用者輸入)
    #[error("invalid number of arguments: expected 2, got {token_count}")]
    MalformedCommand { token_count: usize },

    #[error("PDGA number is invalid: '{value}'")]
    InvalidIdentifier { value: String },

    #[error("directive invalid: '{value}' (expected one of: info, predict_rating)")]
    InvalidDirective { value: String },

    // 遠端抓取錯誤
    #[error("PDGA number {id} was not found")]
    SubjectNotFound { id: String },

    #[error("fetch failed: {message}")]
    FetchFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("Could not read profile page: {message}")]
    ExtractionError { message: String },

    // 配置錯誤
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Chat transport error: {message}")]
    TransportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Remote,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BotError::MalformedCommand { .. }
            | BotError::InvalidIdentifier { .. }
            | BotError::InvalidDirective { .. } => ErrorCategory::Input,
            BotError::SubjectNotFound { .. }
            | BotError::FetchFailed { .. }
            | BotError::ExtractionError { .. } => ErrorCategory::Remote,
            BotError::ConfigError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BotError::TransportError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Parse-time and fetch-time failures are the only ones a chat user ever sees.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Input | ErrorCategory::Remote
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BotError::ConfigError { message } => format!("Configuration problem: {}", message),
            BotError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            BotError::MissingConfigError { field } => {
                format!("Setting '{}' is required but was not provided", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BotError::MalformedCommand { .. } => "Send both a PDGA number and a directive",
            BotError::InvalidIdentifier { .. } => "Use a PDGA number made of digits only",
            BotError::InvalidDirective { .. } => "Use 'info' or 'predict_rating'",
            BotError::SubjectNotFound { .. } => "Double-check the PDGA number",
            BotError::FetchFailed { .. } | BotError::ExtractionError { .. } => {
                "Try again later; the PDGA website may be down"
            }
            BotError::ConfigError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. } => {
                "Check the command-line flags, environment variables and config file"
            }
            BotError::TransportError { .. } => "Check the Discord token and network connectivity",
        }
    }
}

impl From<reqwest::Error> for BotError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "the PDGA website took too long to respond".to_string()
        } else if e.is_connect() {
            format!("could not connect to the PDGA website: {}", e)
        } else {
            e.to_string()
        };
        BotError::FetchFailed {
            status: e.status().map(|s| s.as_u16()),
            message,
        }
    }
}

#[cfg(feature = "discord")]
impl From<serenity::Error> for BotError {
    fn from(e: serenity::Error) -> Self {
        BotError::TransportError {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

/// Longest slice of user input repeated back inside an error message.
pub const MAX_ECHOED_CHARS: usize = 64;

/// Shortens user input before it is echoed in an error, so a long token cannot
/// blow up the reply.
pub fn excerpt(value: &str) -> String {
    if value.chars().count() <= MAX_ECHOED_CHARS {
        return value.to_string();
    }
    let mut short: String = value.chars().take(MAX_ECHOED_CHARS).collect();
    short.push('…');
    short
}
