//! Painting: turns a composed [`Frame`] into an ordered display list.
//!
//! The display list is plain data. [`crate::render`] replays it onto a
//! Canvas2D context; tests inspect it directly. Images are referenced by
//! source URL so the rasterizer can load every one of them before any
//! drawing starts.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use crate::consts::{CARD_RADIUS, PAPER_TEXTURE_ALPHA};
use crate::frame::{CardSnapshot, Frame, Layer};
use crate::geom::Rect;
use crate::layout::{TextLine, TextMeasure, layout_card};

/// How an image fills its destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Scale to cover, cropping the overflow (CSS `background-size: cover`).
    Cover,
}

/// One drawing step.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Image { src: String, dest: Rect, fit: Fit, alpha: f64 },
    Fill { rect: Rect, color: &'static str, alpha: f64 },
    RoundedFill { rect: Rect, radius: f64, color: &'static str },
    /// Save state and clip to a rounded rectangle until the matching `Restore`.
    ClipRounded { rect: Rect, radius: f64 },
    Restore,
    Text(TextLine),
}

/// Black, as used by the dim overlay.
pub const OVERLAY_COLOR: &str = "#000000";

/// Paint a frame, back to front.
pub fn paint(frame: &Frame, measure: &impl TextMeasure) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    for layer in &frame.layers {
        match layer {
            Layer::Background { src, rect } => ops.push(DrawOp::Image {
                src: src.clone(),
                dest: *rect,
                fit: Fit::Cover,
                alpha: 1.0,
            }),
            Layer::Overlay { rect, opacity } => ops.push(DrawOp::Fill {
                rect: *rect,
                color: OVERLAY_COLOR,
                alpha: *opacity,
            }),
            Layer::Card(card) => paint_card(&mut ops, card, measure),
        }
    }
    ops
}

fn paint_card(ops: &mut Vec<DrawOp>, card: &CardSnapshot, measure: &impl TextMeasure) {
    let paper = card.settings.paper;
    ops.push(DrawOp::ClipRounded { rect: card.rect, radius: CARD_RADIUS });
    ops.push(DrawOp::RoundedFill { rect: card.rect, radius: CARD_RADIUS, color: paper.fill() });
    if paper.textured() {
        ops.push(DrawOp::Image {
            src: card.paper_texture_src.clone(),
            dest: card.rect,
            fit: Fit::Cover,
            alpha: PAPER_TEXTURE_ALPHA,
        });
    }
    ops.extend(layout_card(card, measure).lines().cloned().map(DrawOp::Text));
    ops.push(DrawOp::Restore);
}

/// Distinct image sources in first-use order.
#[must_use]
pub fn image_sources(ops: &[DrawOp]) -> Vec<&str> {
    let mut sources: Vec<&str> = Vec::new();
    for op in ops {
        if let DrawOp::Image { src, .. } = op {
            if !sources.contains(&src.as_str()) {
                sources.push(src);
            }
        }
    }
    sources
}
