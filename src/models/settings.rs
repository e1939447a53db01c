//! Widget-level settings supplied by the host control panel.
//!
//! Settings arrive as one flat mapping per widget instance and are read-only
//! for the duration of a render pass. Every field carries a configuration
//! default, so an empty mapping deserializes to a fully usable settings
//! object. Option fields parse leniently: an unknown string degrades to the
//! field default instead of failing deserialization.

use crate::models::element::{ElementKind, Side};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Overall arrangement of the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutOption {
    /// Cards stacked in a vertical flow.
    #[default]
    Vertical,
    /// Cards in a horizontal carousel.
    Horizontal,
}

impl LayoutOption {
    /// Returns the lowercase identifier used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }

    /// Whether this layout uses the carousel shell.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

impl FromStr for LayoutOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            _ => Err(()),
        }
    }
}

/// Reveal animation between the front and back faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationOption {
    /// No transition.
    None,
    /// Rotate around an axis; honors [`FlipDirection`].
    #[default]
    Flip,
    /// Cross-fade.
    Fade,
    /// Scale up.
    Zoom,
    /// Slide the back face in.
    Slide,
    /// Curtain-reveal using duplicated front layers.
    Curtain,
}

impl AnimationOption {
    /// Returns the lowercase identifier used in the animation data attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Flip => "flip",
            Self::Fade => "fade",
            Self::Zoom => "zoom",
            Self::Slide => "slide",
            Self::Curtain => "curtain",
        }
    }
}

impl FromStr for AnimationOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "flip" => Ok(Self::Flip),
            "fade" => Ok(Self::Fade),
            "zoom" => Ok(Self::Zoom),
            "slide" => Ok(Self::Slide),
            "curtain" => Ok(Self::Curtain),
            _ => Err(()),
        }
    }
}

/// Axis and direction of the flip animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlipDirection {
    /// Flip toward the left edge.
    #[default]
    Left,
    /// Flip toward the right edge.
    Right,
    /// Flip toward the top edge.
    Top,
    /// Flip toward the bottom edge.
    Bottom,
}

impl FlipDirection {
    /// Returns the `-left` style suffix appended to the animation identifier.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Left => "-left",
            Self::Right => "-right",
            Self::Top => "-top",
            Self::Bottom => "-bottom",
        }
    }
}

impl FromStr for FlipDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(()),
        }
    }
}

/// Heading element used for face titles.
///
/// A typed tag set means an arbitrary tag name can never reach the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TitleTag {
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>` (default)
    #[default]
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<div>` for non-heading titles.
    Div,
}

impl TitleTag {
    /// Returns the literal tag name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Div => "div",
        }
    }
}

impl FromStr for TitleTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "h3" => Ok(Self::H3),
            "h4" => Ok(Self::H4),
            "h5" => Ok(Self::H5),
            "h6" => Ok(Self::H6),
            "div" => Ok(Self::Div),
            _ => Err(()),
        }
    }
}

/// Per-face enable flags for one side's four elements.
///
/// Absent flags deserialize to `true`: visibility defaults live here, in the
/// configuration layer, never in the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SideToggles {
    /// Icon element visible.
    pub icon: bool,
    /// Title element visible.
    pub title: bool,
    /// Description element visible.
    pub desc: bool,
    /// Button element visible (the item-level flag still applies).
    pub button: bool,
}

impl Default for SideToggles {
    fn default() -> Self {
        Self {
            icon: true,
            title: true,
            desc: true,
            button: true,
        }
    }
}

/// Enable table indexed by (side, element).
///
/// Replaces the original's string-concatenated settings keys with an explicit
/// lookup, so a toggle can only ever be addressed by a valid pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ElementToggles {
    /// Front-face flags.
    pub front: SideToggles,
    /// Back-face flags.
    pub back: SideToggles,
}

impl ElementToggles {
    /// Looks up the enable flag for one (side, element) pair.
    #[must_use]
    pub const fn enabled(&self, side: Side, element: ElementKind) -> bool {
        let toggles = match side {
            Side::Front => self.front,
            Side::Back => self.back,
        };
        match element {
            ElementKind::Icon => toggles.icon,
            ElementKind::Title => toggles.title,
            ElementKind::Desc => toggles.desc,
            ElementKind::Button => toggles.button,
        }
    }
}

/// All widget-level configuration for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    /// Host widget instance id; emitted as the container `id` when non-empty.
    pub widget_id: String,
    /// Card arrangement.
    #[serde(deserialize_with = "lenient_option")]
    pub layout_option: LayoutOption,
    /// Face reveal animation.
    #[serde(deserialize_with = "lenient_option")]
    pub animation_option: AnimationOption,
    /// Flip axis; only meaningful when the animation is `flip`.
    #[serde(deserialize_with = "lenient_option")]
    pub flip_direction: FlipDirection,
    /// CSS transition duration in milliseconds.
    #[serde(deserialize_with = "lenient_u32")]
    pub transition_duration_ms: u32,
    /// Heading tag for face titles.
    #[serde(deserialize_with = "lenient_option")]
    pub title_tag: TitleTag,
    /// Free-text element order for the front face.
    pub front_element_position: String,
    /// Free-text element order for the back face.
    pub back_element_position: String,
    /// Cards visible at once in the horizontal carousel.
    #[serde(deserialize_with = "lenient_u32")]
    pub slides_per_view: u32,
    /// Per-(side, element) visibility flags.
    pub elements: ElementToggles,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            widget_id: String::new(),
            layout_option: LayoutOption::default(),
            animation_option: AnimationOption::default(),
            flip_direction: FlipDirection::default(),
            transition_duration_ms: 1000,
            title_tag: TitleTag::default(),
            front_element_position: String::new(),
            back_element_position: String::new(),
            slides_per_view: 2,
            elements: ElementToggles::default(),
        }
    }
}

impl WidgetSettings {
    /// Returns the free-text element ordering for one side.
    #[must_use]
    pub fn element_position(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front_element_position,
            Side::Back => &self.back_element_position,
        }
    }
}

/// Deserializes an option enum from a string, degrading unknown or empty
/// values to the enum default.
fn lenient_option<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.parse().unwrap_or_default())
}

/// Deserializes a positive integer given either as a JSON number or as a
/// numeric string (hosts serialize control values as strings).
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid integer value: {s:?}"))),
    }
}
