use crate::core::{Directive, Profile};

/// No prediction model exists; `predict_rating` always answers with this.
pub const PREDICT_RATING_STUB: &str = "Your predicted rating is 1050.  You're a crusher!";

/// Discord refuses messages longer than this many characters.
pub const MAX_REPLY_CHARS: usize = 2000;

pub fn format_reply(directive: Directive, profile: &Profile) -> String {
    match directive {
        Directive::Info => info(profile),
        Directive::PredictRating => PREDICT_RATING_STUB.to_string(),
    }
}

/// Cuts `text` down to [`MAX_REPLY_CHARS`] so the transport never rejects it.
pub fn fit_reply(text: String) -> String {
    if text.chars().count() <= MAX_REPLY_CHARS {
        return text;
    }
    let mut cut: String = text.chars().take(MAX_REPLY_CHARS - 1).collect();
    cut.push('…');
    cut
}

fn info(profile: &Profile) -> String {
    let lines = [
        format!(
            "Here is the basic information on PDGA Number {}.",
            profile.pdga_number
        ),
        format!("Name:           {}", profile.name),
        format!("Classification: {}", profile.classification),
        format!("Location:       {}", profile.location),
        format!("Current Rating: {}", profile.current_rating),
    ];
    lines.join("\n")
}
