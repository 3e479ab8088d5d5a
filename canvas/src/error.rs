//! Error types for capture and sharing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::{JsCast, JsValue};

/// Rasterization could not produce an image. The export is aborted and no
/// image is stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    /// No window, document, body, or 2D context to draw with.
    #[error("capture is not supported here: {0}")]
    Unsupported(String),
    /// An image referenced by the frame failed to load or decode.
    #[error("failed to load image {src}: {reason}")]
    ImageLoad { src: String, reason: String },
    /// The canvas was tainted by cross-origin content and cannot be encoded.
    #[error("canvas is tainted by cross-origin content: {0}")]
    Tainted(String),
    /// A drawing call failed.
    #[error("failed to draw frame: {0}")]
    Render(String),
    /// Encoding produced no pixel data.
    #[error("capture produced an empty image")]
    Empty,
}

/// A share side effect did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    /// The user dismissed the native share sheet. Not a failure.
    #[error("share was cancelled")]
    Cancelled,
    /// The platform has no such capability (no `navigator.share`, no clipboard).
    #[error("share capability unavailable: {0}")]
    Unavailable(String),
    #[error("share failed: {0}")]
    Failed(String),
}

/// A destination name that the dispatcher does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported share destination: {0}")]
pub struct UnsupportedDestination(pub String);

/// Best-effort human-readable message from a thrown JS value.
#[must_use]
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// DOM exception name (`"AbortError"`, `"SecurityError"`, ...), if any.
#[must_use]
pub fn js_error_name(value: &JsValue) -> Option<String> {
    value.dyn_ref::<web_sys::DomException>().map(web_sys::DomException::name)
}

impl ShareError {
    /// Classify a rejected share/clipboard promise.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        match js_error_name(value).as_deref() {
            Some("AbortError") => Self::Cancelled,
            Some("NotAllowedError" | "NotSupportedError") => Self::Unavailable(js_message(value)),
            _ => Self::Failed(js_message(value)),
        }
    }
}

impl CaptureError {
    /// Classify a failed `toDataURL`.
    #[must_use]
    pub fn from_encode(value: &JsValue) -> Self {
        match js_error_name(value).as_deref() {
            Some("SecurityError") => Self::Tainted(js_message(value)),
            _ => Self::Render(js_message(value)),
        }
    }
}
