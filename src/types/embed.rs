use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of embeddable content that can appear as a card on the canvas.
///
/// This is a closed set: the canvas host only distinguishes these three
/// content classes. Each kind has a stable identifier string used for
/// persistence and equality, a human-readable label, and a CSS class that
/// addresses the kind's card elements.
///
/// Serialized form (internally tagged): `{ "type": "image-embed" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmbedKind {
    #[serde(rename = "image-embed")]
    Image,
    #[serde(rename = "canvas-embed")]
    Canvas,
    #[serde(rename = "markdown-embed")]
    Markdown,
}

impl EmbedKind {
    /// All embed kinds in canonical order.
    pub const ALL: [EmbedKind; 3] = [EmbedKind::Image, EmbedKind::Canvas, EmbedKind::Markdown];

    /// Stable identifier string, used for persistence and equality.
    pub fn id(&self) -> &'static str {
        match self {
            EmbedKind::Image => "image-embed",
            EmbedKind::Canvas => "canvas-embed",
            EmbedKind::Markdown => "markdown-embed",
        }
    }

    /// Human-readable label for settings UI.
    pub fn display(&self) -> &'static str {
        match self {
            EmbedKind::Image => "Image",
            EmbedKind::Canvas => "Canvas",
            EmbedKind::Markdown => "Markdown",
        }
    }

    /// CSS class selector fragment addressing this kind's card content,
    /// e.g. `.image-embed`.
    pub fn selector_fragment(&self) -> String {
        format!(".{}", self.id())
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
