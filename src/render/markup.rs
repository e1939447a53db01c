//! Escaping utilities and the shared attribute builder.
//!
//! Every text node and attribute value in the rendered output passes through
//! these helpers; inputs originate from user-editable rich text and URLs.

use std::fmt::Write as _;

/// Entity-escapes a string for use in text nodes and double-quoted attribute
/// values.
#[must_use]
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Sanitizes a URL for use in an `href` attribute.
///
/// Relative URLs and the `http`, `https`, `mailto`, and `tel` schemes pass;
/// anything else (notably `javascript:`) is rejected with `None`. Accepted
/// URLs are entity-escaped for the attribute context.
#[must_use]
pub fn sanitize_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    if let Some(colon) = url.find(':') {
        // A colon before any path/query/fragment delimiter marks a scheme.
        let delimiter = url.find(['/', '?', '#']).unwrap_or(url.len());
        if colon < delimiter {
            let scheme = url[..colon].to_ascii_lowercase();
            if !matches!(scheme.as_str(), "http" | "https" | "mailto" | "tel") {
                return None;
            }
        }
    }

    Some(escape_html(url))
}

/// Ordered attribute collector shared by the container renderers.
///
/// Attributes render in insertion order with escaped values; class names
/// accumulate into a single `class` attribute at the position where the first
/// class was added. One serialization path for both output sinks keeps their
/// markup byte-identical.
#[derive(Debug, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
    classes: Vec<String>,
    class_position: Option<usize>,
}

impl Attributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one attribute. Values are escaped at render time.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        self.entries.push((name.to_string(), value.into()));
    }

    /// Adds one class name to the `class` attribute.
    pub fn add_class(&mut self, class: impl Into<String>) {
        if self.class_position.is_none() {
            self.class_position = Some(self.entries.len());
        }
        self.classes.push(class.into());
    }

    /// Renders the collected attributes as ` name="value"…` with a leading
    /// space, or an empty string when nothing was added.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for (index, (name, value)) in self.entries.iter().enumerate() {
            if Some(index) == self.class_position {
                self.write_class(&mut output);
            }
            let _ = write!(output, " {}=\"{}\"", name, escape_html(value));
        }
        if self.class_position == Some(self.entries.len()) {
            self.write_class(&mut output);
        }
        output
    }

    fn write_class(&self, output: &mut String) {
        let joined = self.classes.join(" ");
        let _ = write!(output, " class=\"{}\"", escape_html(&joined));
    }
}
