//! The container shell and card sequence.
//!
//! `render_collection` is the single entry point both output contexts invoke;
//! the editor-preview and page-output adapters in [`crate::output`] are thin
//! funnels over it, so the two sinks always emit the same markup.

use crate::models::{AnimationOption, CardItem, WidgetSettings};
use crate::render::card::render_card;
use crate::render::markup::Attributes;

/// Renders the full widget: container shell plus the ordered card sequence.
///
/// The container carries the layout class, the animation identifier (with a
/// direction suffix only for the flip animation), and the transition
/// duration. Horizontal layout adds the carousel container class and the
/// slides-per-view attribute, wraps the cards in a slider shell with a track
/// element, and appends the navigation and pagination placeholders that the
/// external carousel collaborator populates.
///
/// An empty card slice renders the shell with zero cards; this is not an
/// error, and horizontal layout still emits the slider shell and
/// placeholders.
#[must_use]
pub fn render_collection(cards: &[CardItem], settings: &WidgetSettings) -> String {
    let horizontal = settings.layout_option.is_horizontal();

    let direction = if settings.animation_option == AnimationOption::Flip {
        settings.flip_direction.suffix()
    } else {
        ""
    };
    let animation = format!("{}{}", settings.animation_option.as_str(), direction);

    let mut attrs = Attributes::new();
    if !settings.widget_id.is_empty() {
        attrs.add("id", format!("flipdeck-{}", settings.widget_id));
    }
    attrs.add_class("flipdeck-container");
    attrs.add_class(format!(
        "flipdeck-layout-{}",
        settings.layout_option.as_str()
    ));
    attrs.add("data-flipdeck-animation", animation);
    attrs.add(
        "data-flipdeck-transition",
        settings.transition_duration_ms.to_string(),
    );
    if horizontal {
        attrs.add_class("flipdeck-horizontal-container");
        attrs.add(
            "data-flipdeck-slides",
            settings.slides_per_view.to_string(),
        );
    }

    let mut output = String::from(r#"<div class="flipdeck-wrapper">"#);
    output.push_str(&format!("<div{}>", attrs.render()));

    if horizontal {
        output.push_str(r#"<div class="flipdeck-slider"><div class="flipdeck-slider-track">"#);
    }
    for card in cards {
        output.push_str(&render_card(card, settings, horizontal));
    }
    if horizontal {
        output.push_str("</div></div>");
    }

    output.push_str("</div>");

    if horizontal {
        output.push_str(r#"<div class="flipdeck-slider-next"></div>"#);
        output.push_str(r#"<div class="flipdeck-slider-prev"></div>"#);
        output.push_str(r#"<div class="flipdeck-slider-pagination"></div>"#);
    }

    output.push_str("</div>");
    output
}
