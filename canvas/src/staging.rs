//! Scoped staging surfaces for offscreen capture.
//!
//! A capture needs somewhere to draw that is not the live page. [`Staged`]
//! acquires such a surface and releases it when dropped, so every exit path
//! of a capture (success, `?` on an error, or an early return) leaves the
//! document as it found it.

#[cfg(test)]
#[path = "staging_test.rs"]
mod staging_test;

use std::ops::Deref;

use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::error::{CaptureError, js_message};
use crate::raster::CaptureOptions;

/// Source of temporary drawing surfaces.
pub trait Staging {
    type Surface;

    /// Create and mount a surface of `width` x `height` device pixels.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError::Unsupported`] when no surface can be created.
    fn acquire(&self, width: u32, height: u32) -> Result<Self::Surface, CaptureError>;

    /// Unmount a surface previously returned by `acquire`.
    fn release(&self, surface: &Self::Surface);
}

/// A surface that is released when this guard drops.
pub struct Staged<'a, S: Staging> {
    staging: &'a S,
    surface: S::Surface,
}

impl<'a, S: Staging> Staged<'a, S> {
    /// Acquire a surface from `staging`.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`Staging::acquire`]; nothing is mounted then.
    pub fn acquire(staging: &'a S, width: u32, height: u32) -> Result<Self, CaptureError> {
        let surface = staging.acquire(width, height)?;
        Ok(Self { staging, surface })
    }
}

impl<S: Staging> Deref for Staged<'_, S> {
    type Target = S::Surface;

    fn deref(&self) -> &Self::Target {
        &self.surface
    }
}

impl<S: Staging> Drop for Staged<'_, S> {
    fn drop(&mut self) {
        self.staging.release(&self.surface);
    }
}

/// Offscreen `<canvas>` elements mounted at the end of `<body>`, out of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomStaging {
    quiet: bool,
}

impl DomStaging {
    /// Staging for one capture; logs nothing when `options.quiet` is set.
    #[must_use]
    pub fn for_capture(options: &CaptureOptions) -> Self {
        Self { quiet: options.quiet }
    }

    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Staging for DomStaging {
    type Surface = HtmlCanvasElement;

    fn acquire(&self, width: u32, height: u32) -> Result<HtmlCanvasElement, CaptureError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CaptureError::Unsupported("no document".to_owned()))?;
        let body = document
            .body()
            .ok_or_else(|| CaptureError::Unsupported("no body".to_owned()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| CaptureError::Unsupported(js_message(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CaptureError::Unsupported("canvas element unavailable".to_owned()))?;
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
            .set_attribute(
                "style",
                "position: fixed; left: -100000px; top: 0; pointer-events: none;",
            )
            .map_err(|e| CaptureError::Unsupported(js_message(&e)))?;
        body.append_child(&canvas)
            .map_err(|e| CaptureError::Unsupported(js_message(&e)))?;
        if !self.quiet {
            log::debug!("staged capture surface {width}x{height}");
        }
        Ok(canvas)
    }

    fn release(&self, surface: &HtmlCanvasElement) {
        surface.remove();
        if !self.quiet {
            log::debug!("released capture surface");
        }
    }
}
