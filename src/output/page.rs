//! Page-output adapter (server-side render sink).

use crate::models::{CardItem, WidgetSettings};
use crate::render::render_collection;

/// Renders the widget markup for the real page output.
///
/// A thin funnel over [`render_collection`]: the host hands over the typed
/// settings and card list it already holds, and gets the markup string back.
#[must_use]
pub fn render_page(settings: &WidgetSettings, cards: &[CardItem]) -> String {
    render_collection(cards, settings)
}
