//! Editable poem content and its presentation settings.
//!
//! DESIGN
//! ======
//! Field bindings write straight into this model; there is no separate
//! per-field cache. Exports read a clone of it at click time, so edits made
//! while a capture is running never reach that capture.

use canvas::doc::{FontStyle, PaperStyle, PoemDocument, PresentationSettings};

#[cfg(test)]
#[path = "poem_test.rs"]
mod poem_test;

/// Placeholder shown in the empty body field.
pub const BODY_PLACEHOLDER: &str = "I went to the woods because I wished to live deliberately...";

/// Which poem field an input is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoemField {
    Title,
    Body,
    FooterQuote,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoemState {
    pub doc: PoemDocument,
    pub settings: PresentationSettings,
}

impl PoemState {
    pub fn field(&self, field: PoemField) -> &str {
        match field {
            PoemField::Title => &self.doc.title,
            PoemField::Body => &self.doc.body,
            PoemField::FooterQuote => &self.doc.footer_quote,
        }
    }

    pub fn set_field(&mut self, field: PoemField, value: String) {
        match field {
            PoemField::Title => self.doc.title = value,
            PoemField::Body => self.doc.body = value,
            PoemField::FooterQuote => self.doc.footer_quote = value,
        }
    }

    pub fn toggle_font(&mut self) {
        self.settings.font = self.settings.font.toggled();
    }

    pub fn toggle_paper(&mut self) {
        self.settings.paper = self.settings.paper.toggled();
    }

    /// Apply a slider value. Unparseable input leaves the level unchanged.
    pub fn set_dim_input(&mut self, raw: &str) {
        match raw.trim().parse::<i64>() {
            Ok(level) => self.settings.set_dim_level(level),
            Err(_) => log::debug!("ignoring dim input {raw:?}"),
        }
    }

    pub fn is_typewriter(&self) -> bool {
        self.settings.font == FontStyle::Typewriter
    }

    pub fn is_plain_paper(&self) -> bool {
        self.settings.paper == PaperStyle::Plain
    }

    /// CSS opacity for the background overlay.
    pub fn overlay_opacity_css(&self) -> String {
        canvas::dim::opacity_css(self.settings.overlay_opacity())
    }

    /// Class list for the live poem card.
    pub fn card_class(&self) -> &'static str {
        match (self.settings.font, self.settings.paper) {
            (FontStyle::Handwritten, PaperStyle::Aged) => "poem-card poem-card--handwritten poem-card--aged",
            (FontStyle::Handwritten, PaperStyle::Plain) => "poem-card poem-card--handwritten poem-card--plain",
            (FontStyle::Typewriter, PaperStyle::Aged) => "poem-card poem-card--typewriter poem-card--aged",
            (FontStyle::Typewriter, PaperStyle::Plain) => "poem-card poem-card--typewriter poem-card--plain",
        }
    }
}
