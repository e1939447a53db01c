//! Face elements and element ordering types.

use serde::{Deserialize, Serialize};

/// One face of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The always-visible face.
    Front,
    /// The optional reveal face.
    Back,
}

impl Side {
    /// Returns the lowercase name used in class names and settings keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// One of the four renderable face elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Glyph, image, or short text marker.
    Icon,
    /// Heading element.
    Title,
    /// Paragraph of body text.
    Desc,
    /// Call-to-action link or button.
    Button,
}

impl ElementKind {
    /// Returns the ordering token for this element ("icon", "title", "desc", "button").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Title => "title",
            Self::Desc => "desc",
            Self::Button => "button",
        }
    }

    /// Parses an ordering token. Tokens are matched exactly; anything else is `None`.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "icon" => Some(Self::Icon),
            "title" => Some(Self::Title),
            "desc" => Some(Self::Desc),
            "button" => Some(Self::Button),
            _ => None,
        }
    }
}

/// The canonical display order used when no valid ordering is configured.
pub const DEFAULT_ELEMENT_ORDER: [ElementKind; 4] = [
    ElementKind::Icon,
    ElementKind::Title,
    ElementKind::Desc,
    ElementKind::Button,
];

/// A total permutation of the four face elements.
///
/// Invariant: contains each of icon, title, desc, and button exactly once.
/// The only way to build one from user input is
/// [`crate::parser::element_order::resolve`], which upholds the invariant for
/// arbitrary input strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementOrder([ElementKind; 4]);

impl ElementOrder {
    /// Wraps a permutation. Callers must pass each element exactly once.
    #[must_use]
    pub const fn new(order: [ElementKind; 4]) -> Self {
        Self(order)
    }

    /// Iterates the elements in display order.
    pub fn iter(&self) -> impl Iterator<Item = ElementKind> + '_ {
        self.0.iter().copied()
    }

    /// Returns the underlying array.
    #[must_use]
    pub const fn as_array(&self) -> [ElementKind; 4] {
        self.0
    }
}

impl Default for ElementOrder {
    fn default() -> Self {
        Self(DEFAULT_ELEMENT_ORDER)
    }
}
