//! Dim level to overlay opacity.
//!
//! The same opacity drives the live preview overlay and the overlay baked into
//! an exported frame, so both always agree.

#[cfg(test)]
#[path = "dim_test.rs"]
mod dim_test;

use crate::consts::MAX_DIM_LEVEL;

/// Opacity of the dark overlay for a dim level.
///
/// The caller clamps first; a level above 100 yields an opacity above 1.0.
#[must_use]
pub fn overlay_opacity(dim_level: u32) -> f64 {
    f64::from(dim_level) / f64::from(MAX_DIM_LEVEL)
}

/// Clamp raw slider input into `0..=100`.
#[must_use]
pub fn clamp_dim_level(raw: i64) -> u32 {
    u32::try_from(raw.clamp(0, i64::from(MAX_DIM_LEVEL))).unwrap_or(0)
}

/// CSS value for an opacity, trimmed to two decimals.
#[must_use]
pub fn opacity_css(opacity: f64) -> String {
    format!("{opacity:.2}")
}
