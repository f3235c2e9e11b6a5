use async_trait::async_trait;
use pdga_bot::core::command;
use pdga_bot::core::ProfileSource;
use pdga_bot::{
    BotError, BotSettings, Directive, InboundMessage, MessageHandler, PdgaNumber, Profile,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

/// Counts fetches and answers with a fixed profile.
#[derive(Clone, Default)]
struct CountingSource {
    calls: Arc<AtomicUsize>,
}

impl CountingSource {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for CountingSource {
    async fn fetch(&self, pdga_number: PdgaNumber) -> pdga_bot::Result<Profile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Profile {
            pdga_number,
            name: "Test Player".to_string(),
            location: "Helsinki, Finland".to_string(),
            classification: "Amateur".to_string(),
            current_rating: "912".to_string(),
        })
    }
}

fn from_user(content: &str) -> InboundMessage {
    InboundMessage {
        channel_id: "general".to_string(),
        author_is_bot: false,
        content: content.to_string(),
    }
}

#[test]
fn test_parse_properties() {
    for raw in ["", "1", "info", "   \t  "] {
        assert!(matches!(
            command::parse(raw),
            Err(BotError::MalformedCommand { .. })
        ));
    }
    for id in ["-1", "abc", "1e3", "0x10", "١٢٣"] {
        let raw = format!("{} info", id);
        assert!(matches!(
            command::parse(&raw),
            Err(BotError::InvalidIdentifier { .. })
        ));
    }
    for directive in ["infos", "predict", "rating", "help"] {
        let raw = format!("123 {}", directive);
        assert!(matches!(
            command::parse(&raw),
            Err(BotError::InvalidDirective { .. })
        ));
    }

    let parsed = assert_ok!(command::parse("0 predict_rating"));
    assert_eq!(parsed.pdga_number, PdgaNumber::new(0));
    assert_eq!(parsed.directive, Directive::PredictRating);
}

#[tokio::test]
async fn test_parse_errors_never_fetch() {
    let source = CountingSource::default();
    let handler = MessageHandler::new(source.clone(), BotSettings::default());

    for content in ["/pdga", "/pdga abc info", "/pdga 12 stats", "/pdga -4 info"] {
        let reply = handler.handle(&from_user(content)).await.unwrap();
        assert!(
            reply.text.starts_with("Looks like you used the bot wrong!"),
            "unexpected reply for '{}': {}",
            content,
            reply.text
        );
    }

    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_each_valid_command_fetches_once() {
    let source = CountingSource::default();
    let handler = MessageHandler::new(source.clone(), BotSettings::default());

    let info = handler.handle(&from_user("/pdga 42 info")).await.unwrap();
    let predict = handler
        .handle(&from_user("/pdga 42 predict_rating"))
        .await
        .unwrap();

    assert_eq!(source.calls(), 2);
    assert!(info.text.contains("Location:       Helsinki, Finland"));
    assert_ne!(info.text, predict.text);
}

#[tokio::test]
async fn test_concurrent_events_are_independent() {
    let source = CountingSource::default();
    let handler = Arc::new(MessageHandler::new(source.clone(), BotSettings::default()));

    let mut tasks = Vec::new();
    for id in 1..=8u64 {
        let handler = Arc::clone(&handler);
        tasks.push(tokio::spawn(async move {
            handler
                .handle(&from_user(&format!("/pdga {} info", id)))
                .await
                .map(|reply| (id, reply.text))
        }));
    }

    for task in tasks {
        let (id, text) = task.await.unwrap().unwrap();
        assert!(text.contains(&format!("PDGA Number {}.", id)));
    }
    assert_eq!(source.calls(), 8);
}

#[tokio::test]
async fn test_run_propagates_typed_errors() {
    struct NotFound;

    #[async_trait]
    impl ProfileSource for NotFound {
        async fn fetch(&self, pdga_number: PdgaNumber) -> pdga_bot::Result<Profile> {
            Err(BotError::SubjectNotFound {
                id: pdga_number.to_string(),
            })
        }
    }

    let handler = MessageHandler::new(NotFound, BotSettings::default());
    let parsed = assert_ok!(command::parse("7 info"));
    let err = assert_err!(handler.run(&parsed).await);
    assert!(matches!(err, BotError::SubjectNotFound { ref id } if id == "7"));
    assert!(err.is_user_facing());
}
