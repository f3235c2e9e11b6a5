//! Discord transport for serenity.
//!
//! Converts gateway messages into [`InboundMessage`]s and posts whatever the
//! [`MessageHandler`] answers back to the same channel.

use std::sync::Arc;

use {
    secrecy::{ExposeSecret, SecretString},
    serenity::{
        all::{Client, Context, EventHandler, GatewayIntents, Message, Ready},
        async_trait,
    },
    tracing::{error, info, warn},
};

use crate::core::{handler::MessageHandler, ConfigProvider, InboundMessage, ProfileSource};
use crate::utils::error::Result;

pub struct DiscordHandler<S: ProfileSource, C: ConfigProvider> {
    handler: Arc<MessageHandler<S, C>>,
}

impl<S: ProfileSource, C: ConfigProvider> DiscordHandler<S, C> {
    pub fn new(handler: Arc<MessageHandler<S, C>>) -> Self {
        Self { handler }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

pub fn to_inbound(msg: &Message) -> InboundMessage {
    InboundMessage {
        channel_id: msg.channel_id.to_string(),
        author_is_bot: msg.author.bot,
        content: msg.content.clone(),
    }
}

#[async_trait]
impl<S, C> EventHandler for DiscordHandler<S, C>
where
    S: ProfileSource + 'static,
    C: ConfigProvider + 'static,
{
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            trigger = self.handler.config().trigger(),
            "✅ Bot is now running. Press CTRL-C to exit."
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let inbound = to_inbound(&msg);
        let Some(reply) = self.handler.handle(&inbound).await else {
            return;
        };

        if let Err(e) = msg.channel_id.say(&ctx.http, &reply.text).await {
            warn!(channel_id = %reply.channel_id, error = %e, "failed to send reply");
        }
    }
}

/// Connects to the gateway and processes messages until CTRL-C.
pub async fn run<S, C>(token: &SecretString, handler: MessageHandler<S, C>) -> Result<()>
where
    S: ProfileSource + 'static,
    C: ConfigProvider + 'static,
{
    let event_handler = DiscordHandler::new(Arc::new(handler));
    let mut client = Client::builder(token.expose_secret(), DiscordHandler::<S, C>::intents())
        .event_handler(event_handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("🛑 Shutdown signal received, closing Discord session");
                shard_manager.shutdown_all().await;
            }
            Err(e) => error!(error = %e, "failed to listen for shutdown signal"),
        }
    });

    client.start().await?;
    info!("Discord session closed");
    Ok(())
}
