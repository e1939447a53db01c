//! Sample command: emit a ready-to-edit payload document.

use crate::models::{CardItem, WidgetSettings};
use crate::parser::RenderPayload;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Generate a sample payload with control-panel default cards
#[derive(Debug, Clone, Args)]
pub struct SampleArgs {
    /// Number of cards to generate
    #[arg(short, long, value_name = "N", default_value_t = 3)]
    pub cards: usize,

    /// Output path for the payload (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Serializable payload document shape.
#[derive(Debug, Serialize)]
struct PayloadDoc {
    settings: WidgetSettings,
    cards: Vec<CardItem>,
}

impl SampleArgs {
    /// Execute the sample command
    pub fn execute(&self) -> Result<()> {
        let payload = sample_payload(self.cards);
        let doc = PayloadDoc {
            settings: payload.settings,
            cards: payload.cards,
        };

        let json =
            serde_json::to_string_pretty(&doc).context("Failed to serialize sample payload")?;

        match &self.output {
            Some(path) => {
                fs::write(path, &json)
                    .with_context(|| format!("Failed to write sample file: {}", path.display()))?;
                println!("Wrote sample payload to: {}", path.display());
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}

/// Builds a payload with default settings and `count` panel-default cards,
/// titled the way the control panel numbers new entries.
#[must_use]
pub fn sample_payload(count: usize) -> RenderPayload {
    let cards = (1..=count)
        .map(|index| {
            let mut card = CardItem::panel_default();
            card.front.title = format!("Card {index}");
            card.back.title = format!("Card {index}");
            card
        })
        .collect();

    RenderPayload {
        settings: WidgetSettings::default(),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_cards_are_numbered_with_unique_ids() {
        let payload = sample_payload(3);
        assert_eq!(payload.cards.len(), 3);
        assert_eq!(payload.cards[0].front.title, "Card 1");
        assert_eq!(payload.cards[2].front.title, "Card 3");
        assert_ne!(payload.cards[0].id, payload.cards[1].id);
    }

    #[test]
    fn sample_round_trips_through_the_payload_parser() {
        let payload = sample_payload(2);
        let doc = PayloadDoc {
            settings: payload.settings,
            cards: payload.cards,
        };
        let json = serde_json::to_string(&doc).unwrap();

        let parsed = crate::parser::parse_payload(&json).unwrap();
        assert_eq!(parsed.cards.len(), 2);
        assert!(parsed.cards[0].back_enabled);
        assert!(!parsed.cards[0].front.button_enabled);
        assert!(parsed.cards[0].back.button_enabled);
    }
}
