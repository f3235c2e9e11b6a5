use crate::utils::error::{excerpt, BotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A PDGA membership number, kept exactly as typed (minus surrounding whitespace).
///
/// Only ASCII digits that fit a `u64` are accepted; leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PdgaNumber(String);

impl PdgaNumber {
    pub fn new(value: u64) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PdgaNumber {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || BotError::InvalidIdentifier {
            value: excerpt(s),
        };
        // 只收 ASCII 數字："+5"、"-1" 與全形數字都不接受
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // 超出 u64 也視為無效
        trimmed.parse::<u64>().map_err(|_| invalid())?;
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for PdgaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    Info,
    PredictRating,
}

impl Directive {
    pub const ALL: [Directive; 2] = [Directive::Info, Directive::PredictRating];

    pub fn as_str(&self) -> &'static str {
        match self {
            Directive::Info => "info",
            Directive::PredictRating => "predict_rating",
        }
    }
}

impl FromStr for Directive {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        Directive::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| BotError::InvalidDirective { value: excerpt(s) })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub pdga_number: PdgaNumber,
    pub directive: Directive,
}

/// Player data scraped from a single profile page.
///
/// Only built by a successful fetch. Fields the page did not carry are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub pdga_number: PdgaNumber,
    pub name: String,
    pub location: String,
    pub classification: String,
    pub current_rating: String,
}

/// A chat message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub channel_id: String,
    pub author_is_bot: bool,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub channel_id: String,
    pub text: String,
}
