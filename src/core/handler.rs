use crate::core::command::{self, usage};
use crate::core::reply::{fit_reply, format_reply};
use crate::core::{Command, ConfigProvider, InboundMessage, OutboundReply, ProfileSource};
use crate::utils::error::Result;

/// Turns one chat message into at most one reply.
///
/// Holds no per-message state, so a single instance can serve concurrent events.
pub struct MessageHandler<S: ProfileSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: ProfileSource, C: ConfigProvider> MessageHandler<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// `None` means the message was not meant for the bot.
    pub async fn handle(&self, message: &InboundMessage) -> Option<OutboundReply> {
        if message.author_is_bot {
            return None;
        }
        let args = command::strip_trigger(&message.content, self.config.trigger())?;

        tracing::info!(
            channel_id = %message.channel_id,
            "Received command: '{}'",
            message.content.trim()
        );

        let text = fit_reply(self.respond(args).await);
        Some(OutboundReply {
            channel_id: message.channel_id.clone(),
            text,
        })
    }

    /// Runs parse, fetch and format for the text after the trigger.
    pub async fn respond(&self, args: &str) -> String {
        let command = match command::parse(args) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("❌ Could not parse command '{}': {}", args.trim(), e);
                return format!(
                    "Looks like you used the bot wrong!\n{}\n{}",
                    usage(self.config.trigger()),
                    e
                );
            }
        };

        match self.run(&command).await {
            Ok(text) => text,
            Err(e) => {
                if e.is_user_facing() {
                    tracing::warn!(
                        pdga_number = %command.pdga_number,
                        category = ?e.category(),
                        "❌ Profile lookup failed: {}",
                        e
                    );
                } else {
                    // 非使用者造成的錯誤，仍要回覆，但記為 error
                    tracing::error!(
                        pdga_number = %command.pdga_number,
                        category = ?e.category(),
                        severity = ?e.severity(),
                        "❌ Profile lookup hit an internal error: {}",
                        e
                    );
                }
                format!("Error retrieving player profile: {}", e)
            }
        }
    }

    /// `predict_rating` also goes through the fetch, so unknown numbers are reported.
    pub async fn run(&self, command: &Command) -> Result<String> {
        let profile = self.source.fetch(command.pdga_number.clone()).await?;
        tracing::debug!(
            pdga_number = %profile.pdga_number,
            directive = %command.directive,
            "Formatting reply"
        );
        Ok(format_reply(command.directive, &profile))
    }
}
