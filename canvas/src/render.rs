//! Rendering: replays a display list onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a finished display list plus the already-decoded images it
//! references, and produces pixels. It does not decide what to draw.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::raster::CanvasRasterizer`]) maps them into
//! [`crate::error::CaptureError`].

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::geom::{Rect, Size, cover_crop};
use crate::layout::{TextLine, TextMeasure};
use crate::paint::{DrawOp, Fit};

/// Measures text with the context's own font metrics.
pub struct CanvasMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasure<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure<'_> {
    fn width(&self, text: &str, font: &str) -> f64 {
        self.ctx.set_font(font);
        self.ctx.measure_text(text).map_or(0.0, |m| m.width())
    }
}

/// Draw every op in order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails or an image op references a
/// source missing from `images`.
pub fn replay(
    ctx: &CanvasRenderingContext2d,
    ops: &[DrawOp],
    images: &HashMap<String, HtmlImageElement>,
) -> Result<(), JsValue> {
    for op in ops {
        match op {
            DrawOp::Image { src, dest, fit, alpha } => {
                let image = images
                    .get(src)
                    .ok_or_else(|| JsValue::from_str(&format!("image not loaded: {src}")))?;
                draw_image(ctx, image, *dest, *fit, *alpha)?;
            }
            DrawOp::Fill { rect, color, alpha } => {
                ctx.save();
                ctx.set_global_alpha(*alpha);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
                ctx.restore();
            }
            DrawOp::RoundedFill { rect, radius, color } => {
                rounded_path(ctx, *rect, *radius)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
            }
            DrawOp::ClipRounded { rect, radius } => {
                ctx.save();
                rounded_path(ctx, *rect, *radius)?;
                ctx.clip();
            }
            DrawOp::Restore => ctx.restore(),
            DrawOp::Text(line) => draw_text(ctx, line)?,
        }
    }
    Ok(())
}

// =============================================================
// Primitives
// =============================================================

fn draw_image(
    ctx: &CanvasRenderingContext2d,
    image: &HtmlImageElement,
    dest: Rect,
    fit: Fit,
    alpha: f64,
) -> Result<(), JsValue> {
    let natural = Size::new(f64::from(image.natural_width()), f64::from(image.natural_height()));
    let crop = match fit {
        Fit::Cover => cover_crop(natural, dest.size()),
    };
    // Zero-sized images draw nothing.
    let Some(crop) = crop else {
        return Ok(());
    };

    ctx.save();
    ctx.set_global_alpha(alpha);
    ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        image,
        crop.x,
        crop.y,
        crop.width,
        crop.height,
        dest.x,
        dest.y,
        dest.width,
        dest.height,
    )?;
    ctx.restore();
    Ok(())
}

fn rounded_path(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.width * 0.5).min(rect.height * 0.5).max(0.0);
    ctx.begin_path();
    ctx.move_to(rect.x + r, rect.y);
    ctx.arc_to(rect.right(), rect.y, rect.right(), rect.bottom(), r)?;
    ctx.arc_to(rect.right(), rect.bottom(), rect.x, rect.bottom(), r)?;
    ctx.arc_to(rect.x, rect.bottom(), rect.x, rect.y, r)?;
    ctx.arc_to(rect.x, rect.y, rect.right(), rect.y, r)?;
    ctx.close_path();
    Ok(())
}

fn draw_text(ctx: &CanvasRenderingContext2d, line: &TextLine) -> Result<(), JsValue> {
    ctx.set_font(&line.font);
    ctx.set_fill_style_str(line.color);
    ctx.set_text_align(line.align.as_css());
    ctx.set_text_baseline("top");
    ctx.fill_text(&line.text, line.x, line.y)
}
