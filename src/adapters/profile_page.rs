//! Field extraction for pdga.com player pages.
//!
//! Everything that knows about the site's markup lives here, so a layout change
//! only touches this file.

use crate::core::{PdgaNumber, Profile};
use crate::utils::error::{BotError, Result};
use scraper::{ElementRef, Html, Selector};

const NAME_SELECTOR: &str = "#page-title";
const RATING_SELECTOR: &str = ".current-rating";
const CLASSIFICATION_SELECTOR: &str = ".classification";
const LOCATION_SELECTOR: &str = ".location";

/// Nested tags that hold labels ("Current Rating:") or side notes, not the value.
const LABEL_TAGS: [&str; 2] = ["strong", "small"];

pub struct ProfilePage {
    document: Html,
}

impl ProfilePage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn into_profile(self, pdga_number: PdgaNumber) -> Result<Profile> {
        let name = self.player_name(&pdga_number)?;
        Ok(Profile {
            pdga_number,
            name,
            location: self.field_text(LOCATION_SELECTOR)?,
            classification: self.field_text(CLASSIFICATION_SELECTOR)?,
            current_rating: self.field_text(RATING_SELECTOR)?,
        })
    }

    /// Page title reads like "Jane Doe #12345"; the number suffix is dropped.
    fn player_name(&self, pdga_number: &PdgaNumber) -> Result<String> {
        let selector = selector(NAME_SELECTOR)?;
        let title: String = self
            .document
            .select(&selector)
            .flat_map(|element| element.text())
            .collect();
        let suffix = format!("#{}", pdga_number);
        Ok(title.replace(&suffix, "").trim().to_string())
    }

    fn field_text(&self, css: &str) -> Result<String> {
        let selector = selector(css)?;
        let mut text = String::new();
        for element in self.document.select(&selector) {
            push_text_without_labels(element, &mut text);
        }
        Ok(text.trim().to_string())
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| BotError::ExtractionError {
        message: format!("bad selector '{}': {}", css, e),
    })
}

fn push_text_without_labels(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            if !LABEL_TAGS.contains(&child_element.value().name()) {
                push_text_without_labels(child_element, out);
            }
        }
    }
}
