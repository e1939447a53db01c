//! Host payload parsing.
//!
//! A render payload is one JSON document (or JSON5, since hand-written
//! fixtures tend to carry comments and trailing commas) holding the widget settings
//! and the card list, exactly as the host control panel supplies them. Only a
//! syntactically unreadable document is an error; everything below that
//! degrades: missing settings become defaults, a missing or non-array card
//! list becomes an empty list, and a malformed entry is skipped while its
//! valid siblings still render.

use crate::models::{CardItem, WidgetSettings};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Settings plus card list for one widget instance.
#[derive(Debug, Clone, Default)]
pub struct RenderPayload {
    /// Widget-level configuration.
    pub settings: WidgetSettings,
    /// Ordered card list.
    pub cards: Vec<CardItem>,
}

/// Raw document shape before card-level leniency is applied.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PayloadDoc {
    settings: WidgetSettings,
    cards: Value,
}

/// Parses a payload document from a string.
///
/// Strict JSON is tried first, then JSON5.
pub fn parse_payload(input: &str) -> Result<RenderPayload> {
    let doc: PayloadDoc = match serde_json::from_str(input) {
        Ok(doc) => doc,
        Err(json_err) => json5::from_str(input)
            .map_err(|json5_err| {
                anyhow::anyhow!("not valid JSON ({json_err}) nor JSON5 ({json5_err})")
            })
            .context("Failed to parse render payload")?,
    };

    Ok(RenderPayload {
        settings: doc.settings,
        cards: collect_cards(doc.cards),
    })
}

/// Coerces the raw `cards` value into a card list.
///
/// Anything other than an array yields zero cards; array entries that fail to
/// deserialize are skipped.
fn collect_cards(value: Value) -> Vec<CardItem> {
    let Value::Array(entries) = value else {
        if !value.is_null() {
            debug!("card list is not an array; rendering zero cards");
        }
        return Vec::new();
    };

    let mut cards = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<CardItem>(entry) {
            Ok(card) => cards.push(card),
            Err(err) => warn!("skipping malformed card at index {index}: {err}"),
        }
    }
    cards
}
