use crate::core::{Command, Directive, PdgaNumber};
use crate::utils::error::{BotError, Result};

pub fn usage(trigger: &str) -> String {
    format!("Usage: {} <pdga-number> <info|predict_rating>", trigger)
}

/// Returns the text after `trigger` when the message is addressed to the bot.
///
/// The trigger must be the whole first token, so `/pdgaxyz 1 info` is not a match.
pub fn strip_trigger<'a>(content: &'a str, trigger: &str) -> Option<&'a str> {
    let rest = content.trim_start().strip_prefix(trigger)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// Parses `<pdga-number> <directive>`. Extra tokens are ignored.
pub fn parse(raw: &str) -> Result<Command> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(BotError::MalformedCommand {
            token_count: tokens.len(),
        });
    }

    // 順序：先號碼，再指令
    let pdga_number: PdgaNumber = tokens[0].parse()?;
    let directive: Directive = tokens[1].parse()?;

    Ok(Command {
        pdga_number,
        directive,
    })
}
