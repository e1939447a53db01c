//! Editor-preview adapter (live-preview render sink).

use crate::parser::parse_payload;
use crate::render::render_collection;
use anyhow::Result;

/// Renders the widget markup for the editor's live preview.
///
/// The editor re-sends the whole payload document on every settings change,
/// so this adapter parses first and then delegates to the same
/// [`render_collection`] the page sink uses. The two outputs are
/// byte-identical for equivalent input, and re-invoking with unchanged input
/// is idempotent.
pub fn render_preview(payload: &str) -> Result<String> {
    let payload = parse_payload(payload)?;
    Ok(render_collection(&payload.cards, &payload.settings))
}
