//! Data models for widget settings, cards, and element ordering.
//!
//! Models are supplied whole by the host control panel and are read-only
//! during a render pass. They carry no rendering logic.

pub mod card;
pub mod element;
pub mod settings;

// Re-export all model types
pub use card::{ButtonLink, CardItem, IconSource, SideContent};
pub use element::{ElementKind, ElementOrder, Side, DEFAULT_ELEMENT_ORDER};
pub use settings::{
    AnimationOption, ElementToggles, FlipDirection, LayoutOption, SideToggles, TitleTag,
    WidgetSettings,
};
