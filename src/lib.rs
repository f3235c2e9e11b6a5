pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::pdga::PdgaProfileFetcher;
pub use config::BotSettings;
pub use core::handler::MessageHandler;
pub use domain::model::{Directive, InboundMessage, OutboundReply, PdgaNumber, Profile};
pub use utils::error::{BotError, Result};
