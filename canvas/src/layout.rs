//! Card text layout for export.
//!
//! Positions the title, body, and footer quote of a card snapshot the way the
//! live card renders them: a one-line centered title, a word-wrapped body, and
//! a centered footer quote of at most two rows pinned to the bottom. Width
//! measurement is delegated to a [`TextMeasure`] so layout stays testable
//! without a browser.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{
    BODY_INSET, BODY_LINE_HEIGHT, BODY_SIZE, CARD_PADDING, FOOTER_INK, FOOTER_LINE_HEIGHT, FOOTER_MAX_ROWS,
    FOOTER_SIZE, INK, TITLE_GAP, TITLE_LINE_HEIGHT, TITLE_SIZE,
};
use crate::doc::FontStyle;
use crate::frame::CardSnapshot;
use crate::geom::Rect;

/// Measures rendered text width in CSS pixels.
pub trait TextMeasure {
    fn width(&self, text: &str, font: &str) -> f64;
}

/// Horizontal anchor of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    /// Canvas `textAlign` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// One positioned line of text. `y` is the top of the glyph box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: String,
    pub color: &'static str,
    pub align: Align,
}

/// All text of a card, positioned in frame coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardLayout {
    pub title: Option<TextLine>,
    pub body: Vec<TextLine>,
    pub footer: Vec<TextLine>,
}

impl CardLayout {
    /// Every line in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.title.iter().chain(self.body.iter()).chain(self.footer.iter())
    }
}

/// CSS font shorthand for a card font at `size` pixels.
#[must_use]
pub fn font_css(style: FontStyle, size: f64, italic: bool) -> String {
    let slant = if italic { "italic " } else { "" };
    format!("{slant}{size}px {}", style.family())
}

/// Lay out a card snapshot.
pub fn layout_card(card: &CardSnapshot, measure: &impl TextMeasure) -> CardLayout {
    let inner = card.rect.inset(CARD_PADDING);
    if inner.width <= 0.0 || inner.height <= 0.0 {
        return CardLayout::default();
    }
    let style = card.settings.font;

    let title_font = font_css(style, TITLE_SIZE, false);
    let title = fit_single_line(&card.doc.title, inner.width, &title_font, measure).map(|text| TextLine {
        text,
        x: inner.center_x(),
        y: inner.y + (TITLE_LINE_HEIGHT - TITLE_SIZE) * 0.5,
        font: title_font.clone(),
        color: INK,
        align: Align::Center,
    });

    let footer_font = font_css(style, FOOTER_SIZE, true);
    let mut footer_rows = wrap(&card.doc.footer_quote, inner.width, &footer_font, measure);
    while footer_rows.last().is_some_and(String::is_empty) {
        footer_rows.pop();
    }
    footer_rows.truncate(FOOTER_MAX_ROWS);
    let footer_top = inner.bottom() - line_count_f64(footer_rows.len()) * FOOTER_LINE_HEIGHT;
    let footer = footer_rows
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            text,
            x: inner.center_x(),
            y: footer_top + line_count_f64(i) * FOOTER_LINE_HEIGHT + (FOOTER_LINE_HEIGHT - FOOTER_SIZE) * 0.5,
            font: footer_font.clone(),
            color: FOOTER_INK,
            align: Align::Center,
        })
        .collect();

    let body_area = Rect::new(
        inner.x,
        inner.y + TITLE_LINE_HEIGHT + TITLE_GAP,
        inner.width,
        (footer_top - (inner.y + TITLE_LINE_HEIGHT + TITLE_GAP)).max(0.0),
    )
    .inset(BODY_INSET);
    let body_font = font_css(style, BODY_SIZE, false);
    let body = wrap(&card.doc.body, body_area.width, &body_font, measure)
        .into_iter()
        .enumerate()
        .map(|(i, text)| (body_area.y + line_count_f64(i) * BODY_LINE_HEIGHT, text))
        .take_while(|(top, _)| top + BODY_LINE_HEIGHT <= body_area.bottom())
        .filter(|(_, text)| !text.is_empty())
        .map(|(top, text)| TextLine {
            text,
            x: body_area.x,
            y: top + (BODY_LINE_HEIGHT - BODY_SIZE) * 0.5,
            font: body_font.clone(),
            color: INK,
            align: Align::Left,
        })
        .collect();

    CardLayout { title, body, footer }
}

/// Word-wrap `text` to `max_width`.
///
/// Explicit newlines always break. Blank paragraphs are kept as empty lines so
/// spacing survives. Words wider than a whole line are broken by character.
pub fn wrap(text: &str, max_width: f64, font: &str, measure: &impl TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() { word.to_owned() } else { format!("{current} {word}") };
            if measure.width(&candidate, font) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if measure.width(word, font) <= max_width {
                current = word.to_owned();
            } else {
                let mut pieces = break_word(word, max_width, font, measure);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(current);
    }
    lines
}

fn break_word(word: &str, max_width: f64, font: &str, measure: &impl TextMeasure) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if current.chars().count() > 1 && measure.width(&current, font) > max_width {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    pieces.push(current);
    pieces
}

/// Keep the longest prefix of a single line that fits.
///
/// Prefix lengths grow by doubling until one overflows, then a binary search
/// settles the cut, so measuring cost tracks the visible width rather than the
/// length of the text.
fn fit_single_line(text: &str, max_width: f64, font: &str, measure: &impl TextMeasure) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    // Byte offset just past each char, so prefix `n` is `text[..ends[n - 1]]`.
    let ends: Vec<usize> = text.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
    let prefix = |n: usize| &text[..ends[n - 1]];
    let fits = |n: usize| measure.width(prefix(n), font) <= max_width;

    let total = ends.len();
    // `fitting` always fits (0 means nothing does); `overflowing` never does.
    let mut fitting = 0;
    let mut overflowing = 1;
    loop {
        if overflowing >= total {
            if fits(total) {
                return Some(text.to_owned());
            }
            overflowing = total;
            break;
        }
        if !fits(overflowing) {
            break;
        }
        fitting = overflowing;
        overflowing *= 2;
    }
    while overflowing - fitting > 1 {
        let mid = fitting + (overflowing - fitting) / 2;
        if fits(mid) {
            fitting = mid;
        } else {
            overflowing = mid;
        }
    }
    (fitting > 0).then(|| prefix(fitting).to_owned())
}

#[allow(clippy::cast_precision_loss)]
fn line_count_f64(n: usize) -> f64 {
    n as f64
}
