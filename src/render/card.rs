//! One card: front face, optional curtain duplicates, optional back face.

use crate::models::{AnimationOption, CardItem, Side, WidgetSettings};
use crate::render::markup::Attributes;
use crate::render::side::render_side;

/// Class carried by the first duplicated front layer of the curtain effect.
pub const FRONT_DUPLICATE_CLASS: &str = "flipdeck-front-duplicate";

/// Class carried by the overlay duplicate of the curtain effect.
pub const FRONT_DUPLICATE_OVERLAY_CLASS: &str = "flipdeck-front-duplicate-overlay";

/// Renders one card.
///
/// The item wrapper carries the card's stable id and, conditionally, the
/// slide class (horizontal layout) and the front-only marker (back disabled).
/// The front face always renders once. The curtain animation additionally
/// renders two more copies of the front (a duplicate layer and its overlay)
/// used by the curtain-reveal effect; they are exact re-renders of the same
/// front content, not independent state. The back face
/// renders last when enabled.
///
/// Face renders per card: 1 (no back), 2 (back, non-curtain), 4 (back,
/// curtain).
#[must_use]
pub fn render_card(card: &CardItem, settings: &WidgetSettings, horizontal: bool) -> String {
    let curtain = settings.animation_option == AnimationOption::Curtain;

    let mut attrs = Attributes::new();
    attrs.add_class("flipdeck-item");
    if horizontal {
        attrs.add_class("flipdeck-slide");
    }
    if !card.back_enabled {
        attrs.add_class("flipdeck-front-only");
    }
    attrs.add("data-flipdeck-card", card.id.as_str());

    let mut output = format!("<div{}>", attrs.render());
    output.push_str(r#"<div class="flipdeck-inner">"#);
    output.push_str(r#"<div class="flipdeck-inner-overlay">"#);

    output.push_str(&render_side(Side::Front, card, settings, ""));
    if curtain && card.back_enabled {
        output.push_str(&render_side(Side::Front, card, settings, FRONT_DUPLICATE_CLASS));
        output.push_str(&render_side(
            Side::Front,
            card,
            settings,
            FRONT_DUPLICATE_OVERLAY_CLASS,
        ));
    }
    if card.back_enabled {
        output.push_str(&render_side(Side::Back, card, settings, ""));
    }

    output.push_str("</div></div></div>");
    output
}
