//! Document model: the poem, its presentation settings, and the exported image.
//!
//! `PoemDocument` and `PresentationSettings` are plain values owned by the
//! editor's reactive state. The compositor clones them into a frame at export
//! time, so nothing produced by an export ever observes later edits.
//! `ExportedImage` is the encoded result of one rasterization and is never
//! mutated after creation.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use crate::consts::{AGED_PAPER_FILL, DEFAULT_DIM_LEVEL, PLAIN_PAPER_FILL};
use crate::dim::{clamp_dim_level, overlay_opacity};

/// Title shown on a fresh page.
pub const DEFAULT_TITLE: &str = "Poetry in the Woods";

/// Footer quote shown on a fresh page.
pub const DEFAULT_FOOTER_QUOTE: &str = "\"Simplify, simplify.\" - Henry David Thoreau";

/// The editable text of the poem card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemDocument {
    /// Single-line heading.
    pub title: String,
    /// Poem body; may contain newlines.
    pub body: String,
    /// Attribution or quote under the poem.
    pub footer_quote: String,
}

impl Default for PoemDocument {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            body: String::new(),
            footer_quote: DEFAULT_FOOTER_QUOTE.to_owned(),
        }
    }
}

/// Typeface used for all card text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Handwritten,
    Typewriter,
}

impl FontStyle {
    /// CSS `font-family` value.
    #[must_use]
    pub fn family(self) -> &'static str {
        match self {
            Self::Handwritten => "Caveat, cursive",
            Self::Typewriter => "'Courier Prime', monospace",
        }
    }

    /// The other style; the toggle flips between exactly two.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Handwritten => Self::Typewriter,
            Self::Typewriter => Self::Handwritten,
        }
    }
}

/// Paper behind the card text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaperStyle {
    #[default]
    Aged,
    Plain,
}

impl PaperStyle {
    /// Solid fill color of the card.
    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::Aged => AGED_PAPER_FILL,
            Self::Plain => PLAIN_PAPER_FILL,
        }
    }

    /// Whether the old-paper texture is layered over the fill.
    #[must_use]
    pub fn textured(self) -> bool {
        self == Self::Aged
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Aged => Self::Plain,
            Self::Plain => Self::Aged,
        }
    }
}

/// Cosmetic options. None of them touch [`PoemDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationSettings {
    pub font: FontStyle,
    pub paper: PaperStyle,
    /// Background dimming, always within `0..=100`.
    dim_level: u32,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            font: FontStyle::default(),
            paper: PaperStyle::default(),
            dim_level: DEFAULT_DIM_LEVEL,
        }
    }
}

impl PresentationSettings {
    #[must_use]
    pub fn new(font: FontStyle, paper: PaperStyle, dim_level: i64) -> Self {
        Self { font, paper, dim_level: clamp_dim_level(dim_level) }
    }

    #[must_use]
    pub fn dim_level(&self) -> u32 {
        self.dim_level
    }

    /// Set the dim level from raw input, clamping into range.
    pub fn set_dim_level(&mut self, raw: i64) {
        self.dim_level = clamp_dim_level(raw);
    }

    /// Overlay opacity for the current dim level.
    #[must_use]
    pub fn overlay_opacity(&self) -> f64 {
        overlay_opacity(self.dim_level)
    }
}

/// An encoded bitmap produced by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    data_uri: String,
}

impl ExportedImage {
    #[must_use]
    pub fn new(data_uri: String) -> Self {
        Self { data_uri }
    }

    /// The self-contained `data:` URI, usable as an `<img src>` or a download href.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Whether the URI carries any payload after the header.
    ///
    /// Browsers return `"data:,"` for a zero-sized canvas.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        self.data_uri
            .split_once(',')
            .is_some_and(|(head, body)| head.starts_with("data:") && !body.is_empty())
    }
}
