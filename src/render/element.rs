//! Face element renderers.
//!
//! Four independent, side-agnostic renderers, one per element kind. Each is a
//! pure function of (side, card, settings) returning a markup fragment, or
//! `None` when the element has nothing to show. Missing or malformed content
//! omits the element; it never fails the render.

use crate::models::{CardItem, IconSource, Side, WidgetSettings};
use crate::render::markup::{escape_html, sanitize_url};
use regex::Regex;
use std::fmt::Write as _;

/// Renders the icon element of one face.
///
/// Branches on the icon source: a font glyph becomes an `<i>` carrying the
/// glyph class, an image becomes an `<img>` with the face title as alt text,
/// and literal text becomes a `<span>`. An empty value or an unrecognized
/// source renders nothing.
#[must_use]
pub fn render_icon(side: Side, card: &CardItem, _settings: &WidgetSettings) -> Option<String> {
    let content = card.side(side);

    let inner = match &content.icon {
        IconSource::Icon { glyph } if !glyph.trim().is_empty() => {
            format!(
                r#"<i class="flipdeck-icon {}" aria-hidden="true"></i>"#,
                escape_html(glyph.trim())
            )
        }
        IconSource::Image { url } => {
            let src = sanitize_url(url)?;
            format!(r#"<img src="{}" alt="{}">"#, src, escape_html(&content.title))
        }
        IconSource::Text { text } if !text.is_empty() => {
            format!("<span>{}</span>", escape_html(text))
        }
        _ => return None,
    };

    Some(format!(
        r#"<div class="flipdeck-icon-wrapper">{inner}</div>"#
    ))
}

/// Renders the title element of one face using the configured heading tag.
#[must_use]
pub fn render_title(side: Side, card: &CardItem, settings: &WidgetSettings) -> Option<String> {
    let title = &card.side(side).title;
    if title.is_empty() {
        return None;
    }

    let tag = settings.title_tag.as_str();
    Some(format!(
        r#"<{tag} class="flipdeck-title">{}</{tag}>"#,
        escape_html(title)
    ))
}

/// Renders the description element of one face.
#[must_use]
pub fn render_desc(side: Side, card: &CardItem, _settings: &WidgetSettings) -> Option<String> {
    let description = &card.side(side).description;
    if description.is_empty() {
        return None;
    }

    Some(format!(
        r#"<p class="flipdeck-desc">{}</p>"#,
        escape_html(description)
    ))
}

/// Renders the button element of one face.
///
/// Requires the item-level enable flag to be exactly affirmative and the
/// button text to be non-empty. With a usable URL the button is an anchor;
/// the external and nofollow sub-flags control `target` and `rel`, and the
/// first `name|value` pair of the custom attribute field is appended. Without
/// a URL (or with one whose scheme is rejected) the button degrades to a
/// non-navigating `<button>`.
#[must_use]
pub fn render_button(side: Side, card: &CardItem, _settings: &WidgetSettings) -> Option<String> {
    let content = card.side(side);
    if !content.button_enabled || content.button_text.is_empty() {
        return None;
    }

    let text = escape_html(&content.button_text);
    let link = content
        .button_url
        .as_ref()
        .and_then(|link| sanitize_url(&link.url).map(|href| (link, href)));

    let mut output = String::from(r#"<div class="flipdeck-btn-wrapper">"#);
    if let Some((link, href)) = link {
        let target = if link.is_external { "_blank" } else { "_self" };
        let _ = write!(
            output,
            r#"<a href="{href}" class="flipdeck-button" target="{target}""#
        );
        if link.nofollow {
            output.push_str(r#" rel="nofollow""#);
        }
        if let Some((name, value)) = parse_custom_attribute(&link.custom_attributes) {
            let _ = write!(output, r#" {}="{}""#, name, escape_html(&value));
        }
        let _ = write!(output, ">{text}</a>");
    } else {
        let _ = write!(output, r#"<button class="flipdeck-button">{text}</button>"#);
    }
    output.push_str("</div>");

    Some(output)
}

/// Splits a `name|value` custom attribute setting into its first pair.
///
/// The attribute name must look like an attribute name; anything else drops
/// the pair so user input can never break out of the tag.
fn parse_custom_attribute(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.split('|');
    let name = parts.next()?.trim();
    let value = parts.next()?;

    let name_guard = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").unwrap();
    if !name_guard.is_match(name) {
        return None;
    }

    Some((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ButtonLink, SideContent};

    fn card_with_front(front: SideContent) -> CardItem {
        CardItem {
            id: "test-card".to_string(),
            back_enabled: false,
            front,
            back: SideContent::default(),
        }
    }

    fn settings() -> WidgetSettings {
        WidgetSettings::default()
    }

    #[test]
    fn glyph_icon_renders_aria_hidden() {
        let card = card_with_front(SideContent {
            icon: IconSource::Icon {
                glyph: "fa fa-star".to_string(),
            },
            ..SideContent::default()
        });
        let markup = render_icon(Side::Front, &card, &settings()).unwrap();
        assert_eq!(
            markup,
            r#"<div class="flipdeck-icon-wrapper"><i class="flipdeck-icon fa fa-star" aria-hidden="true"></i></div>"#
        );
    }

    #[test]
    fn empty_glyph_renders_nothing() {
        let card = card_with_front(SideContent {
            icon: IconSource::Icon {
                glyph: "  ".to_string(),
            },
            ..SideContent::default()
        });
        assert_eq!(render_icon(Side::Front, &card, &settings()), None);
    }

    #[test]
    fn image_icon_uses_title_as_alt() {
        let card = card_with_front(SideContent {
            icon: IconSource::Image {
                url: "https://example.com/pic.png".to_string(),
            },
            title: "My \"Card\"".to_string(),
            ..SideContent::default()
        });
        let markup = render_icon(Side::Front, &card, &settings()).unwrap();
        assert_eq!(
            markup,
            r#"<div class="flipdeck-icon-wrapper"><img src="https://example.com/pic.png" alt="My &quot;Card&quot;"></div>"#
        );
    }

    #[test]
    fn image_icon_without_url_renders_nothing() {
        let card = card_with_front(SideContent {
            icon: IconSource::Image {
                url: String::new(),
            },
            ..SideContent::default()
        });
        assert_eq!(render_icon(Side::Front, &card, &settings()), None);
    }

    #[test]
    fn text_icon_renders_span() {
        let card = card_with_front(SideContent {
            icon: IconSource::Text {
                text: "42".to_string(),
            },
            ..SideContent::default()
        });
        let markup = render_icon(Side::Front, &card, &settings()).unwrap();
        assert_eq!(
            markup,
            r#"<div class="flipdeck-icon-wrapper"><span>42</span></div>"#
        );
    }

    #[test]
    fn unknown_icon_renders_nothing() {
        let card = card_with_front(SideContent {
            icon: IconSource::Unknown,
            ..SideContent::default()
        });
        assert_eq!(render_icon(Side::Front, &card, &settings()), None);
    }

    #[test]
    fn title_uses_configured_tag() {
        let card = card_with_front(SideContent {
            title: "Hello".to_string(),
            ..SideContent::default()
        });
        let mut settings = settings();
        settings.title_tag = crate::models::TitleTag::H5;
        assert_eq!(
            render_title(Side::Front, &card, &settings).unwrap(),
            r#"<h5 class="flipdeck-title">Hello</h5>"#
        );
    }

    #[test]
    fn title_is_escaped() {
        let card = card_with_front(SideContent {
            title: "<script>alert(1)</script>".to_string(),
            ..SideContent::default()
        });
        let markup = render_title(Side::Front, &card, &settings()).unwrap();
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_title_renders_nothing() {
        let card = card_with_front(SideContent::default());
        assert_eq!(render_title(Side::Front, &card, &settings()), None);
    }

    #[test]
    fn desc_renders_paragraph() {
        let card = card_with_front(SideContent {
            description: "Body text".to_string(),
            ..SideContent::default()
        });
        assert_eq!(
            render_desc(Side::Front, &card, &settings()).unwrap(),
            r#"<p class="flipdeck-desc">Body text</p>"#
        );
    }

    #[test]
    fn button_requires_affirmative_flag() {
        // Text present but the flag was never set: stays hidden.
        let card = card_with_front(SideContent {
            button_text: "Click".to_string(),
            ..SideContent::default()
        });
        assert_eq!(render_button(Side::Front, &card, &settings()), None);
    }

    #[test]
    fn button_requires_text() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            ..SideContent::default()
        });
        assert_eq!(render_button(Side::Front, &card, &settings()), None);
    }

    #[test]
    fn button_without_url_is_non_navigating() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            button_text: "Click".to_string(),
            ..SideContent::default()
        });
        assert_eq!(
            render_button(Side::Front, &card, &settings()).unwrap(),
            r#"<div class="flipdeck-btn-wrapper"><button class="flipdeck-button">Click</button></div>"#
        );
    }

    #[test]
    fn button_with_url_renders_anchor() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            button_text: "Go".to_string(),
            button_url: Some(ButtonLink {
                url: "https://example.com".to_string(),
                is_external: true,
                nofollow: true,
                custom_attributes: String::new(),
            }),
            ..SideContent::default()
        });
        assert_eq!(
            render_button(Side::Front, &card, &settings()).unwrap(),
            r#"<div class="flipdeck-btn-wrapper"><a href="https://example.com" class="flipdeck-button" target="_blank" rel="nofollow">Go</a></div>"#
        );
    }

    #[test]
    fn internal_link_targets_self_without_rel() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            button_text: "Go".to_string(),
            button_url: Some(ButtonLink {
                url: "/page".to_string(),
                ..ButtonLink::default()
            }),
            ..SideContent::default()
        });
        assert_eq!(
            render_button(Side::Front, &card, &settings()).unwrap(),
            r#"<div class="flipdeck-btn-wrapper"><a href="/page" class="flipdeck-button" target="_self">Go</a></div>"#
        );
    }

    #[test]
    fn rejected_scheme_falls_back_to_button() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            button_text: "Go".to_string(),
            button_url: Some(ButtonLink {
                url: "javascript:alert(1)".to_string(),
                ..ButtonLink::default()
            }),
            ..SideContent::default()
        });
        let markup = render_button(Side::Front, &card, &settings()).unwrap();
        assert!(markup.contains("<button"));
        assert!(!markup.contains("javascript"));
    }

    #[test]
    fn custom_attribute_first_pair_only() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            button_text: "Go".to_string(),
            button_url: Some(ButtonLink {
                url: "https://example.com".to_string(),
                custom_attributes: "data-track|cta|ignored".to_string(),
                ..ButtonLink::default()
            }),
            ..SideContent::default()
        });
        let markup = render_button(Side::Front, &card, &settings()).unwrap();
        assert!(markup.contains(r#" data-track="cta""#));
        assert!(!markup.contains("ignored"));
    }

    #[test]
    fn custom_attribute_invalid_name_dropped() {
        assert_eq!(parse_custom_attribute(r#"on click|x"#), None);
        assert_eq!(parse_custom_attribute(r#""><img>|x"#), None);
        assert_eq!(parse_custom_attribute("solo"), None);
        assert_eq!(
            parse_custom_attribute("data-id|7"),
            Some(("data-id".to_string(), "7".to_string()))
        );
    }

    #[test]
    fn custom_attribute_value_is_escaped() {
        let card = card_with_front(SideContent {
            button_enabled: true,
            button_text: "Go".to_string(),
            button_url: Some(ButtonLink {
                url: "https://example.com".to_string(),
                custom_attributes: r#"data-x|"><script>"#.to_string(),
                ..ButtonLink::default()
            }),
            ..SideContent::default()
        });
        let markup = render_button(Side::Front, &card, &settings()).unwrap();
        assert!(markup.contains(r#" data-x="&quot;&gt;&lt;script&gt;""#));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn back_side_content_is_independent() {
        let card = CardItem {
            id: "c".to_string(),
            back_enabled: true,
            front: SideContent::default(),
            back: SideContent {
                title: "Back title".to_string(),
                ..SideContent::default()
            },
        };
        assert_eq!(render_title(Side::Front, &card, &settings()), None);
        assert!(render_title(Side::Back, &card, &settings()).is_some());
    }
}
