//! Card list entries and per-face content.
//!
//! Cards are created, edited, reordered, and deleted by the host control
//! panel; this crate only ever receives a finished ordered sequence and never
//! persists it. Serde defaults mirror the renderer contract (absent flags stay
//! off); the control-panel defaults for newly created cards live in the
//! `panel_default` constructors.

use crate::models::element::Side;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon slot of one face.
///
/// The variant tag mirrors the control panel's icon type selector. An
/// unrecognized tag deserializes to [`IconSource::Unknown`], which renders
/// nothing rather than failing the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IconSource {
    /// No icon configured.
    #[default]
    None,
    /// Font glyph referenced by CSS class (e.g. "fa fa-star").
    Icon {
        /// Glyph class string.
        #[serde(default)]
        glyph: String,
    },
    /// Bitmap icon referenced by URL.
    Image {
        /// Image URL.
        #[serde(default)]
        url: String,
    },
    /// Short literal text used as a marker.
    Text {
        /// Literal text.
        #[serde(default)]
        text: String,
    },
    /// Any icon type this crate does not recognize.
    #[serde(other)]
    Unknown,
}

/// Link target and attributes for a face button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ButtonLink {
    /// Destination URL; empty means "no destination".
    pub url: String,
    /// Open in a new tab (`target="_blank"`).
    pub is_external: bool,
    /// Add `rel="nofollow"`.
    pub nofollow: bool,
    /// One extra attribute as `name|value`; only the first pair is used.
    pub custom_attributes: String,
}

/// Content of one face of one card.
///
/// Each field is independently presentable: absence of one never suppresses
/// another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SideContent {
    /// Icon slot.
    pub icon: IconSource,
    /// Title text; empty omits the element.
    pub title: String,
    /// Description text; empty omits the element.
    pub description: String,
    /// Must be exactly `true` for the button to render. Absent means off;
    /// the differing panel defaults (front off, back on) live in
    /// [`SideContent::panel_default`].
    pub button_enabled: bool,
    /// Button label; empty omits the element.
    pub button_text: String,
    /// Button destination; `None` renders a non-navigating button.
    pub button_url: Option<ButtonLink>,
}

impl SideContent {
    /// Builds the content the control panel pre-fills for a new card's face.
    #[must_use]
    pub fn panel_default(side: Side) -> Self {
        Self {
            icon: IconSource::Icon {
                glyph: "fa fa-star".to_string(),
            },
            title: "Default Title".to_string(),
            description: "Default description text.".to_string(),
            button_enabled: matches!(side, Side::Back),
            button_text: "Click Here".to_string(),
            button_url: None,
        }
    }
}

/// One repeatable entry in the card list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CardItem {
    /// Stable identifier, unique within the list; used for editor diffing
    /// and never reused after deletion.
    pub id: String,
    /// Whether the back face exists. Absent means front-only; the panel
    /// default for a newly created card is `true`.
    pub back_enabled: bool,
    /// Front face content.
    pub front: SideContent,
    /// Back face content.
    pub back: SideContent,
}

impl CardItem {
    /// Builds a card the way the host control panel creates one: fresh
    /// UUID id, back face enabled, panel-default content on both faces.
    #[must_use]
    pub fn panel_default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            back_enabled: true,
            front: SideContent::panel_default(Side::Front),
            back: SideContent::panel_default(Side::Back),
        }
    }

    /// Returns the content of one face.
    #[must_use]
    pub const fn side(&self, side: Side) -> &SideContent {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}
