//! Shared numeric and style constants for the canvas crate.

// ── Export frame ────────────────────────────────────────────────

/// Padding added on every side of the poem card inside the exported frame.
pub const FRAME_PADDING: f64 = 32.0;

/// Output resolution multiplier applied at rasterization time.
pub const EXPORT_SCALE: f64 = 2.0;

/// Filename used for the browser-level download.
pub const EXPORT_FILENAME: &str = "my_poetry.png";

/// MIME type of the encoded export.
pub const EXPORT_MIME: &str = "image/png";

// ── Assets ──────────────────────────────────────────────────────

/// Woodland texture behind the card, both live and exported.
pub const BACKGROUND_SRC: &str = "/wood.jpg";

/// Texture layered over aged paper.
pub const PAPER_TEXTURE_SRC: &str = "/old-paper.avif";

/// Alpha of the paper texture over the aged paper fill.
pub const PAPER_TEXTURE_ALPHA: f64 = 0.5;

// ── Card geometry (CSS pixels) ──────────────────────────────────

/// Inner padding between the card edge and its text.
pub const CARD_PADDING: f64 = 48.0;

/// Corner radius of the card.
pub const CARD_RADIUS: f64 = 8.0;

/// Title font size; the title is a single line.
pub const TITLE_SIZE: f64 = 36.0;

/// Line height of the title row.
pub const TITLE_LINE_HEIGHT: f64 = 40.0;

/// Gap between the title row and the body.
pub const TITLE_GAP: f64 = 32.0;

/// Inset of the body text inside its area.
pub const BODY_INSET: f64 = 24.0;

/// Body font size.
pub const BODY_SIZE: f64 = 20.0;

/// Body line height.
pub const BODY_LINE_HEIGHT: f64 = 28.0;

/// Footer quote font size.
pub const FOOTER_SIZE: f64 = 14.0;

/// Footer quote line height.
pub const FOOTER_LINE_HEIGHT: f64 = 20.0;

/// Maximum rows shown for the footer quote.
pub const FOOTER_MAX_ROWS: usize = 2;

// ── Colors ──────────────────────────────────────────────────────

/// Aged paper fill.
pub const AGED_PAPER_FILL: &str = "#f4e5c9";

/// Plain paper fill.
pub const PLAIN_PAPER_FILL: &str = "#ffffff";

/// Title and body ink.
pub const INK: &str = "#4a2f1b";

/// Footer quote ink.
pub const FOOTER_INK: &str = "#4b5563";

// ── Dim level ───────────────────────────────────────────────────

/// Highest dim level the slider produces.
pub const MAX_DIM_LEVEL: u32 = 100;

/// Dim level on first load.
pub const DEFAULT_DIM_LEVEL: u32 = 30;
