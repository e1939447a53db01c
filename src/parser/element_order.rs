//! Element order resolution from free-text position settings.
//!
//! The control panel exposes the per-face element order as a free-text field,
//! so the value can be empty, partial, duplicated, or garbage. Resolution is
//! pure and total: any input produces a complete permutation of the four face
//! elements, never an error.

use crate::models::{ElementKind, ElementOrder, DEFAULT_ELEMENT_ORDER};
use regex::Regex;

/// Resolves a free-text ordering specification into a total element order.
///
/// # Algorithm
///
/// 1. Trim the input. If it is empty or contains no recognizable token,
///    return the canonical default order `[icon, title, desc, button]`.
/// 2. Split on commas, trim fragments, discard empties, and deduplicate
///    while preserving first-seen order.
/// 3. Keep only the four recognized tokens in their filtered relative order;
///    unrecognized tokens are dropped silently.
/// 4. Append any missing element in canonical order after the explicit ones.
///
/// # Examples
///
/// ```
/// use flipdeck::models::{ElementKind, DEFAULT_ELEMENT_ORDER};
/// use flipdeck::parser::element_order::resolve;
///
/// assert_eq!(resolve("").as_array(), DEFAULT_ELEMENT_ORDER);
/// assert_eq!(
///     resolve("button,button,xyz").as_array(),
///     [
///         ElementKind::Button,
///         ElementKind::Icon,
///         ElementKind::Title,
///         ElementKind::Desc,
///     ]
/// );
/// ```
#[must_use]
pub fn resolve(position_spec: &str) -> ElementOrder {
    let spec = position_spec.trim();

    let token_guard = Regex::new(r"\b(icon|title|desc|button)\b").unwrap();
    if spec.is_empty() || !token_guard.is_match(spec) {
        return ElementOrder::default();
    }

    let mut order: Vec<ElementKind> = Vec::with_capacity(4);
    for fragment in spec.split(',') {
        let Some(kind) = ElementKind::from_token(fragment.trim()) else {
            continue;
        };
        if !order.contains(&kind) {
            order.push(kind);
        }
    }

    // Complete the permutation with the missing elements in canonical order.
    for kind in DEFAULT_ELEMENT_ORDER {
        if !order.contains(&kind) {
            order.push(kind);
        }
    }

    debug_assert_eq!(order.len(), 4);
    ElementOrder::new([order[0], order[1], order[2], order[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementKind::{Button, Desc, Icon, Title};

    #[test]
    fn empty_input_yields_default_order() {
        assert_eq!(resolve("").as_array(), DEFAULT_ELEMENT_ORDER);
        assert_eq!(resolve("   ").as_array(), DEFAULT_ELEMENT_ORDER);
    }

    #[test]
    fn garbage_input_yields_default_order() {
        assert_eq!(resolve("foo,bar,baz").as_array(), DEFAULT_ELEMENT_ORDER);
        assert_eq!(resolve(",,,").as_array(), DEFAULT_ELEMENT_ORDER);
        assert_eq!(resolve("???").as_array(), DEFAULT_ELEMENT_ORDER);
    }

    #[test]
    fn full_permutation_is_honored() {
        assert_eq!(
            resolve("button,desc,title,icon").as_array(),
            [Button, Desc, Title, Icon]
        );
    }

    #[test]
    fn partial_list_is_completed_in_canonical_order() {
        assert_eq!(resolve("desc").as_array(), [Desc, Icon, Title, Button]);
        assert_eq!(
            resolve("title,button").as_array(),
            [Title, Button, Icon, Desc]
        );
    }

    #[test]
    fn duplicates_keep_first_seen_position() {
        assert_eq!(
            resolve("desc,icon,desc,desc").as_array(),
            [Desc, Icon, Title, Button]
        );
    }

    #[test]
    fn unknown_tokens_are_dropped_silently() {
        assert_eq!(
            resolve("button,button,xyz").as_array(),
            [Button, Icon, Title, Desc]
        );
        assert_eq!(
            resolve("header,desc,footer,icon").as_array(),
            [Desc, Icon, Title, Button]
        );
    }

    #[test]
    fn whitespace_around_tokens_is_trimmed() {
        assert_eq!(
            resolve("  title ,  icon  ").as_array(),
            [Title, Icon, Desc, Button]
        );
    }

    #[test]
    fn case_sensitive_tokens_only() {
        // "Icon" is not a recognized token, but "desc" makes the input
        // recognizable, so filtering applies instead of the default.
        assert_eq!(resolve("Icon,desc").as_array(), [Desc, Icon, Title, Button]);
    }

    #[test]
    fn totality_over_arbitrary_inputs() {
        for spec in [
            "",
            "icon",
            "icon,icon,icon",
            "button,title",
            "a,b,c,d,e,f",
            "desc;title",
            "icon, title, desc, button, extra",
        ] {
            let order = resolve(spec).as_array();
            for kind in DEFAULT_ELEMENT_ORDER {
                assert_eq!(
                    order.iter().filter(|k| **k == kind).count(),
                    1,
                    "element {:?} must appear exactly once for input {:?}",
                    kind,
                    spec
                );
            }
        }
    }
}
