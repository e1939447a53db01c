//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use flipdeck::models::{
    AnimationOption, ButtonLink, CardItem, IconSource, LayoutOption, SideContent, WidgetSettings,
};

/// Default settings with a deterministic widget id.
pub fn test_settings() -> WidgetSettings {
    WidgetSettings {
        widget_id: "w-test".to_string(),
        ..WidgetSettings::default()
    }
}

/// Horizontal-layout settings.
pub fn horizontal_settings() -> WidgetSettings {
    WidgetSettings {
        layout_option: LayoutOption::Horizontal,
        ..test_settings()
    }
}

/// Settings with the curtain animation.
pub fn curtain_settings() -> WidgetSettings {
    WidgetSettings {
        animation_option: AnimationOption::Curtain,
        ..test_settings()
    }
}

/// A fully populated face: glyph icon, title, description, enabled button.
pub fn full_side(label: &str) -> SideContent {
    SideContent {
        icon: IconSource::Icon {
            glyph: "fa fa-star".to_string(),
        },
        title: format!("{label} title"),
        description: format!("{label} description"),
        button_enabled: true,
        button_text: format!("{label} button"),
        button_url: Some(ButtonLink {
            url: "https://example.com".to_string(),
            ..ButtonLink::default()
        }),
    }
}

/// A card with deterministic id and both faces populated.
pub fn test_card(id: &str, back_enabled: bool) -> CardItem {
    CardItem {
        id: id.to_string(),
        back_enabled,
        front: full_side("Front"),
        back: full_side("Back"),
    }
}

/// Counts rendered faces: each face emits exactly one content overlay.
pub fn face_count(markup: &str) -> usize {
    markup.matches("flipdeck-content-overlay").count()
}

/// Counts rendered cards.
pub fn card_count(markup: &str) -> usize {
    markup.matches("data-flipdeck-card=").count()
}
