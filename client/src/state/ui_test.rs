use super::*;

use async_trait::async_trait;
use canvas::config::ExportConfig;
use canvas::doc::{ExportedImage, PoemDocument, PresentationSettings};
use canvas::error::{CaptureError, ShareError};
use canvas::frame::Frame;
use canvas::geom::Size;
use canvas::raster::{CaptureOptions, Rasterizer};
use canvas::share::{Dispatcher, Platform, SharePayload};
use futures::executor::block_on;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_idle_and_closed() {
    let state = UiState::default();
    assert_eq!(state.session.phase(), Phase::Idle);
    assert!(!state.modal_open());
    assert!(!state.share_disabled());
    assert!(!state.destinations_disabled());
    assert!(!state.native_share);
}

#[test]
fn ui_state_default_has_nothing_to_show() {
    let state = UiState::default();
    assert_eq!(state.preview_src(), None);
    assert_eq!(state.notice(), None);
    assert_eq!(state.error(), None);
}

#[test]
fn share_label_reads_share_when_idle() {
    assert_eq!(UiState::default().share_label(), "Share");
}

// =============================================================
// Driven by a dispatcher
// =============================================================

struct FixedRasterizer(Result<ExportedImage, CaptureError>);

#[async_trait(?Send)]
impl Rasterizer for FixedRasterizer {
    async fn rasterize(&self, _frame: &Frame, _options: &CaptureOptions) -> Result<ExportedImage, CaptureError> {
        self.0.clone()
    }
}

struct NoopPlatform;

#[async_trait(?Send)]
impl Platform for NoopPlatform {
    fn page_url(&self) -> String {
        "https://woods.example/".to_owned()
    }

    fn supports_native_share(&self) -> bool {
        false
    }

    async fn native_share(&self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Unavailable("none".to_owned()))
    }

    async fn copy_text(&self, _text: &str) -> Result<(), ShareError> {
        Ok(())
    }

    fn open_url(&self, _url: &str) -> Result<(), ShareError> {
        Ok(())
    }

    fn save_image(&self, _image: &ExportedImage, _filename: &str) -> Result<(), ShareError> {
        Ok(())
    }
}

fn export_with(result: Result<ExportedImage, CaptureError>) -> Dispatcher<FixedRasterizer, NoopPlatform> {
    let dispatcher = Dispatcher::new(FixedRasterizer(result), NoopPlatform, ExportConfig::default());
    let region = Some(Size::new(400.0, 300.0));
    let _outcome = block_on(dispatcher.export(&PoemDocument::default(), &PresentationSettings::default(), region));
    dispatcher
}

#[test]
fn ready_session_opens_modal_with_preview() {
    let dispatcher = export_with(Ok(ExportedImage::new("data:image/png;base64,AAAA".to_owned())));
    let state = UiState { session: dispatcher.session(), native_share: false };
    assert!(state.modal_open());
    assert!(!state.share_disabled());
    assert_eq!(state.preview_src().as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn instagram_notice_is_mirrored() {
    let dispatcher = export_with(Ok(ExportedImage::new("data:image/png;base64,AAAA".to_owned())));
    let _outcome = block_on(dispatcher.share("instagram"));
    let state = UiState { session: dispatcher.session(), native_share: false };
    assert_eq!(state.notice(), Some(ExportConfig::default().instagram_notice));
    assert!(state.modal_open());
}

#[test]
fn failed_capture_shows_error_and_keeps_modal_closed() {
    let dispatcher = export_with(Err(CaptureError::Empty));
    let state = UiState { session: dispatcher.session(), native_share: false };
    assert!(!state.modal_open());
    assert_eq!(state.preview_src(), None);
    assert!(state.error().is_some_and(|e| e.starts_with("Couldn't create the image")));
}
