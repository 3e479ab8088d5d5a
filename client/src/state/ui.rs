//! UI mirror of the export session.
//!
//! DESIGN
//! ======
//! The share dispatcher owns the session; its observer copies every change
//! into this model so components can render it reactively.

use canvas::share::{Phase, ShareSession};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub session: ShareSession,
    /// Whether the host offers a native share sheet.
    pub native_share: bool,
}

impl UiState {
    pub fn modal_open(&self) -> bool {
        self.session.is_open()
    }

    /// The Share button is disabled while a capture runs.
    pub fn share_disabled(&self) -> bool {
        self.session.is_capturing()
    }

    pub fn share_label(&self) -> &'static str {
        if self.session.is_capturing() { "Preparing..." } else { "Share" }
    }

    /// Destination buttons are disabled while a share or download is underway.
    pub fn destinations_disabled(&self) -> bool {
        matches!(self.session.phase(), Phase::Sharing | Phase::Downloading)
    }

    pub fn preview_src(&self) -> Option<String> {
        self.session.image().map(|image| image.data_uri().to_owned())
    }

    pub fn notice(&self) -> Option<String> {
        self.session.notice().map(str::to_owned)
    }

    pub fn error(&self) -> Option<String> {
        self.session.error().map(|message| format!("Couldn't create the image: {message}"))
    }
}
