//! One face of one card.

use crate::models::{CardItem, ElementKind, Side, WidgetSettings};
use crate::parser::element_order;
use crate::render::element::{render_button, render_desc, render_icon, render_title};
use crate::render::markup::escape_html;
use std::fmt::Write as _;

/// Renders one face of one card.
///
/// Resolves the face's element order from the settings, then emits the fixed
/// three-level wrapper and, inside it, every enabled element that produced a
/// fragment, strictly in resolved order:
///
/// ```text
/// <div class="flipdeck-front">            (plus extra_class when given)
///   <div class="flipdeck-content-overlay">
///     <div class="flipdeck-content">
///       …elements…
/// ```
///
/// `extra_class` distinguishes the curtain animation's duplicated front
/// layers; an empty string adds nothing. Order is the only degree of freedom:
/// no element renders twice, and disabled or empty elements are skipped.
#[must_use]
pub fn render_side(
    side: Side,
    card: &CardItem,
    settings: &WidgetSettings,
    extra_class: &str,
) -> String {
    let order = element_order::resolve(settings.element_position(side));

    let mut class = format!("flipdeck-{}", side.as_str());
    if !extra_class.is_empty() {
        class.push(' ');
        class.push_str(extra_class);
    }

    let mut output = String::new();
    let _ = write!(output, r#"<div class="{}">"#, escape_html(&class));
    output.push_str(r#"<div class="flipdeck-content-overlay">"#);
    output.push_str(r#"<div class="flipdeck-content">"#);

    for kind in order.iter() {
        if !settings.elements.enabled(side, kind) {
            continue;
        }

        let fragment = match kind {
            ElementKind::Icon => render_icon(side, card, settings),
            ElementKind::Title => render_title(side, card, settings),
            ElementKind::Desc => render_desc(side, card, settings),
            ElementKind::Button => render_button(side, card, settings),
        };

        if let Some(fragment) = fragment {
            output.push_str(&fragment);
        }
    }

    output.push_str("</div></div></div>");
    output
}
