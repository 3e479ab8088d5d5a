//! Export and share configuration.
//!
//! Every field has a compiled-in default. The host page may override any
//! subset with a JSON object; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_SRC, EXPORT_FILENAME, EXPORT_SCALE, FRAME_PADDING, PAPER_TEXTURE_SRC};

/// Error returned by [`ExportConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid export config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("export scale must be positive, got {0}")]
    Scale(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Space between the card and the frame edge, per side.
    pub padding: f64,
    /// Output resolution multiplier.
    pub scale: f64,
    /// Download filename.
    pub filename: String,
    pub background_src: String,
    pub paper_texture_src: String,
    /// Title passed to the native share sheet.
    pub share_title: String,
    /// Text passed to the native share sheet and the tweet intent.
    pub share_text: String,
    /// Shown after the page link is copied for Instagram.
    pub instagram_notice: String,
    /// Shown when the clipboard write for Instagram fails.
    pub clipboard_failed_notice: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            padding: FRAME_PADDING,
            scale: EXPORT_SCALE,
            filename: EXPORT_FILENAME.to_owned(),
            background_src: BACKGROUND_SRC.to_owned(),
            paper_texture_src: PAPER_TEXTURE_SRC.to_owned(),
            share_title: "Poetry in the Woods".to_owned(),
            share_text: "I wrote a poem in the woods. Read it here:".to_owned(),
            instagram_notice: "Link copied! Download the image and share it from the Instagram app."
                .to_owned(),
            clipboard_failed_notice: "Couldn't copy the link. Download the image and share it from the Instagram app."
                .to_owned(),
        }
    }
}

impl ExportConfig {
    /// Parse overrides from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or the scale is not positive.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if !(config.scale.is_finite() && config.scale > 0.0) {
            return Err(ConfigError::Scale(config.scale));
        }
        Ok(config)
    }
}
