//! Rasterization: frame in, encoded PNG out.
//!
//! [`Rasterizer`] is the seam the share dispatcher depends on. The browser
//! implementation, [`CanvasRasterizer`], paints the frame onto a staged
//! offscreen canvas at the requested scale and encodes it with `toDataURL`.
//! The staged canvas is removed from the document on every exit path.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::try_join_all;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::ExportConfig;
use crate::consts::EXPORT_MIME;
use crate::doc::ExportedImage;
use crate::error::{CaptureError, js_message};
use crate::frame::Frame;
use crate::paint::{image_sources, paint};
use crate::render::{CanvasMeasure, replay};
use crate::staging::{DomStaging, Staged};

/// Options handed to a rasterizer for one capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureOptions {
    /// Request images with CORS so they do not taint the canvas.
    pub allow_cross_origin: bool,
    /// Output resolution multiplier.
    pub scale: f64,
    /// Suppress diagnostic logging during capture.
    pub quiet: bool,
}

impl CaptureOptions {
    /// The options every export uses.
    #[must_use]
    pub fn for_export(config: &ExportConfig) -> Self {
        Self { allow_cross_origin: true, scale: config.scale, quiet: true }
    }
}

/// Converts a composed frame into an encoded image.
#[async_trait(?Send)]
pub trait Rasterizer {
    /// # Errors
    ///
    /// Returns [`CaptureError`] when no image could be produced.
    async fn rasterize(&self, frame: &Frame, options: &CaptureOptions) -> Result<ExportedImage, CaptureError>;
}

/// Browser rasterizer drawing through Canvas2D.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasRasterizer;

impl CanvasRasterizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Rasterizer for CanvasRasterizer {
    async fn rasterize(&self, frame: &Frame, options: &CaptureOptions) -> Result<ExportedImage, CaptureError> {
        let (width, height) = frame.size.scaled_pixels(options.scale);
        if width == 0 || height == 0 {
            return Err(CaptureError::Empty);
        }

        let staging = DomStaging::for_capture(options);
        let surface = Staged::acquire(&staging, width, height)?;
        let ctx = context_2d(&surface)?;

        let ops = paint(frame, &CanvasMeasure::new(&ctx));
        let images = load_images(&image_sources(&ops), options).await?;

        ctx.scale(options.scale, options.scale)
            .map_err(|e| CaptureError::Render(js_message(&e)))?;
        replay(&ctx, &ops, &images).map_err(|e| CaptureError::Render(js_message(&e)))?;

        let data_uri = surface
            .to_data_url_with_type(EXPORT_MIME)
            .map_err(|e| CaptureError::from_encode(&e))?;
        let image = ExportedImage::new(data_uri);
        if !image.has_payload() {
            return Err(CaptureError::Empty);
        }
        if !options.quiet {
            log::debug!(
                "rasterized {width}x{height} frame ({} ops, {} bytes)",
                ops.len(),
                image.data_uri().len()
            );
        }
        Ok(image)
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CaptureError> {
    canvas
        .get_context("2d")
        .map_err(|e| CaptureError::Unsupported(js_message(&e)))?
        .ok_or_else(|| CaptureError::Unsupported("no 2d context".to_owned()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CaptureError::Unsupported("unexpected context type".to_owned()))
}

async fn load_images(
    sources: &[&str],
    options: &CaptureOptions,
) -> Result<HashMap<String, HtmlImageElement>, CaptureError> {
    let loaded = try_join_all(
        sources
            .iter()
            .map(|src| load_image(src, options.allow_cross_origin)),
    )
    .await?;
    Ok(sources
        .iter()
        .map(|src| (*src).to_owned())
        .zip(loaded)
        .collect())
}

async fn load_image(src: &str, allow_cross_origin: bool) -> Result<HtmlImageElement, CaptureError> {
    let image = HtmlImageElement::new().map_err(|e| CaptureError::Unsupported(js_message(&e)))?;
    if allow_cross_origin {
        image.set_cross_origin(Some("anonymous"));
    }
    image.set_src(src);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| CaptureError::ImageLoad { src: src.to_owned(), reason: js_message(&e) })?;
    Ok(image)
}
