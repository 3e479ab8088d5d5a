//! Share dispatcher: export state machine and share destinations.
//!
//! DESIGN
//! ======
//! [`ShareSession`] is the plain state the UI renders (phase, stored image,
//! last error, notice). [`Dispatcher`] owns the session and drives it through
//!
//! ```text
//! Idle -> Capturing -> Ready -> (Sharing | Downloading) -> Ready -> Idle
//!            \-> Idle (capture failed)
//! ```
//!
//! Side effects go through two seams: a [`Rasterizer`] for the capture and a
//! [`Platform`] for downloads, the native share sheet, new browsing contexts,
//! and the clipboard. Every failure is handled at this boundary: capture
//! failures come back as `Err` with the session reset to Idle; share
//! failures are logged and reported as a [`ShareOutcome`].
//!
//! The session lives in a `RefCell` and is never borrowed across an `.await`,
//! so a second export that arrives while one is in flight sees `Capturing`
//! and is ignored.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use url::form_urlencoded;

use crate::config::ExportConfig;
use crate::doc::{ExportedImage, PoemDocument, PresentationSettings};
use crate::error::{CaptureError, ShareError, UnsupportedDestination};
use crate::frame::compose;
use crate::geom::Size;
use crate::raster::{CaptureOptions, Rasterizer};

const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";

// =============================================================
// Destinations and intents
// =============================================================

/// Where an exported poem can be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Download,
    Native,
    Twitter,
    Facebook,
    Instagram,
}

impl Destination {
    pub const ALL: [Self; 5] = [Self::Download, Self::Native, Self::Twitter, Self::Facebook, Self::Instagram];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Native => "native",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = UnsupportedDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == key)
            .ok_or_else(|| UnsupportedDestination(s.to_owned()))
    }
}

/// Data handed to the native share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// A one-shot request to share to a destination.
///
/// `text` and `url` override the configured share text and the current page
/// URL for this dispatch only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareIntent {
    pub destination: Destination,
    pub text: Option<String>,
    pub url: Option<String>,
}

/// The concrete side effect an intent resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    Save { filename: String },
    NativeShare(SharePayload),
    Open(String),
    CopyLink(String),
}

impl ShareIntent {
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self { destination, text: None, url: None }
    }

    /// Resolve this intent against the config and the current page URL.
    #[must_use]
    pub fn action(&self, config: &ExportConfig, page_url: &str) -> ShareAction {
        let text = self.text.as_deref().unwrap_or(&config.share_text);
        let url = self.url.as_deref().unwrap_or(page_url);
        match self.destination {
            Destination::Download => ShareAction::Save { filename: config.filename.clone() },
            Destination::Native => ShareAction::NativeShare(SharePayload {
                title: config.share_title.clone(),
                text: text.to_owned(),
                url: url.to_owned(),
            }),
            Destination::Twitter => ShareAction::Open(twitter_intent_url(text, url)),
            Destination::Facebook => ShareAction::Open(facebook_share_url(url)),
            Destination::Instagram => ShareAction::CopyLink(url.to_owned()),
        }
    }
}

/// Tweet web intent carrying `text` and `url`, both percent-encoded.
#[must_use]
pub fn twitter_intent_url(text: &str, url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("text", text)
        .append_pair("url", url)
        .finish();
    format!("{TWITTER_INTENT}?{query}")
}

/// Facebook sharer link for `url`, percent-encoded.
#[must_use]
pub fn facebook_share_url(url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("u", url)
        .finish();
    format!("{FACEBOOK_SHARER}?{query}")
}

// =============================================================
// Platform seam
// =============================================================

/// Host capabilities used by the dispatcher.
#[async_trait(?Send)]
pub trait Platform {
    /// URL of the current page, shared as the link.
    fn page_url(&self) -> String;

    /// Whether a native share sheet exists at all.
    fn supports_native_share(&self) -> bool;

    /// # Errors
    ///
    /// [`ShareError::Cancelled`] when the user dismisses the sheet.
    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    /// # Errors
    ///
    /// Returns [`ShareError`] if the clipboard is unavailable or the write is refused.
    async fn copy_text(&self, text: &str) -> Result<(), ShareError>;

    /// Open `url` in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] if the context could not be opened.
    fn open_url(&self, url: &str) -> Result<(), ShareError>;

    /// Trigger a file download of `image`.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] if the download could not be started.
    fn save_image(&self, image: &ExportedImage, filename: &str) -> Result<(), ShareError>;
}

// =============================================================
// Session state
// =============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Capturing,
    Ready,
    Sharing,
    Downloading,
}

/// What the UI renders: where the export flow is and what it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareSession {
    phase: Phase,
    image: Option<ExportedImage>,
    error: Option<String>,
    notice: Option<String>,
}

impl ShareSession {
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The image from the last successful export, until the modal closes.
    #[must_use]
    pub fn image(&self) -> Option<&ExportedImage> {
        self.image.as_ref()
    }

    /// Message of the last capture failure.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Instructional notice for the user, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the share modal should be visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Sharing | Phase::Downloading)
    }

    #[must_use]
    pub fn is_capturing(&self) -> bool {
        self.phase == Phase::Capturing
    }

    fn begin_capture(&mut self) -> bool {
        if !matches!(self.phase, Phase::Idle | Phase::Ready) {
            return false;
        }
        self.phase = Phase::Capturing;
        self.error = None;
        self.notice = None;
        true
    }

    fn finish_capture(&mut self, image: ExportedImage) {
        self.image = Some(image);
        self.phase = Phase::Ready;
    }

    fn fail_capture(&mut self, message: String) {
        self.image = None;
        self.error = Some(message);
        self.phase = Phase::Idle;
    }

    fn begin_share(&mut self, phase: Phase) -> bool {
        if self.phase != Phase::Ready || self.image.is_none() {
            return false;
        }
        self.phase = phase;
        self.notice = None;
        true
    }

    fn end_share(&mut self, notice: Option<String>) {
        // Closed while the share was in flight: stay closed.
        if matches!(self.phase, Phase::Sharing | Phase::Downloading) {
            self.phase = Phase::Ready;
            self.notice = notice;
        }
    }

    fn close(&mut self) {
        self.phase = Phase::Idle;
        self.image = None;
        self.notice = None;
    }

    fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn dismiss_error(&mut self) {
        self.error = None;
    }
}

// =============================================================
// Dispatcher
// =============================================================

/// Result of an export request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// An image is stored and the share modal is open.
    Ready,
    /// The poem card was not rendered; nothing happened.
    NoRegion,
    /// Another export is in flight; this one was ignored.
    Busy,
}

/// Result of a share request. Never an error for the caller to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Completed,
    /// The user dismissed the native share sheet.
    Cancelled,
    Failed(ShareError),
    /// The destination name was not recognized.
    Unsupported,
    /// No image is ready, or another share is in flight.
    NotReady,
}

type Observer = Box<dyn Fn(&ShareSession)>;

pub struct Dispatcher<R, P> {
    rasterizer: R,
    platform: P,
    config: ExportConfig,
    session: RefCell<ShareSession>,
    observer: Option<Observer>,
}

impl<R: Rasterizer, P: Platform> Dispatcher<R, P> {
    #[must_use]
    pub fn new(rasterizer: R, platform: P, config: ExportConfig) -> Self {
        Self { rasterizer, platform, config, session: RefCell::new(ShareSession::default()), observer: None }
    }

    /// Call `observer` with a snapshot after every session change.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(&ShareSession) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    #[must_use]
    pub fn session(&self) -> ShareSession {
        self.session.borrow().clone()
    }

    #[must_use]
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    #[must_use]
    pub fn supports_native_share(&self) -> bool {
        self.platform.supports_native_share()
    }

    /// Compose, rasterize, and store a new export.
    ///
    /// `live_region` is the rendered size of the on-screen poem card. The frame
    /// is composed from `doc` and `settings` as they are now; later edits do
    /// not affect the stored image.
    ///
    /// # Errors
    ///
    /// Returns the [`CaptureError`] when rasterization fails. The session is
    /// back in Idle with no image and the error message recorded.
    pub async fn export(
        &self,
        doc: &PoemDocument,
        settings: &PresentationSettings,
        live_region: Option<Size>,
    ) -> Result<ExportOutcome, CaptureError> {
        let Some(frame) = compose(doc, settings, live_region, &self.config) else {
            log::debug!("export skipped: poem card is not rendered");
            return Ok(ExportOutcome::NoRegion);
        };
        if !self.update(ShareSession::begin_capture) {
            log::debug!("export ignored: another export is in progress");
            return Ok(ExportOutcome::Busy);
        }

        let options = CaptureOptions::for_export(&self.config);
        match self.rasterizer.rasterize(&frame, &options).await {
            Ok(image) => {
                log::info!("export ready ({} bytes)", image.data_uri().len());
                self.update(|s| s.finish_capture(image));
                Ok(ExportOutcome::Ready)
            }
            Err(err) => {
                log::warn!("export failed: {err}");
                let message = err.to_string();
                self.update(|s| s.fail_capture(message));
                Err(err)
            }
        }
    }

    /// Share the stored image to a destination named by the UI.
    ///
    /// Unknown names are logged and ignored.
    pub async fn share(&self, destination: &str) -> ShareOutcome {
        match destination.parse::<Destination>() {
            Ok(destination) => self.dispatch(ShareIntent::new(destination)).await,
            Err(err) => {
                log::warn!("{err}");
                ShareOutcome::Unsupported
            }
        }
    }

    /// Carry out one share intent against the stored image.
    pub async fn dispatch(&self, intent: ShareIntent) -> ShareOutcome {
        let Some(image) = self.session.borrow().image().cloned() else {
            log::debug!("share to {} ignored: no exported image", intent.destination);
            return ShareOutcome::NotReady;
        };

        let action = intent.action(&self.config, &self.platform.page_url());
        let phase = match action {
            ShareAction::Save { .. } => Phase::Downloading,
            _ => Phase::Sharing,
        };
        if !self.update(|s| s.begin_share(phase)) {
            log::debug!("share to {} ignored: session busy", intent.destination);
            return ShareOutcome::NotReady;
        }

        let (outcome, notice) = match action {
            ShareAction::Save { filename } => (completed(self.platform.save_image(&image, &filename)), None),
            ShareAction::Open(url) => (completed(self.platform.open_url(&url)), None),
            ShareAction::NativeShare(payload) => (completed(self.platform.native_share(&payload).await), None),
            ShareAction::CopyLink(url) => match self.platform.copy_text(&url).await {
                Ok(()) => (ShareOutcome::Completed, Some(self.config.instagram_notice.clone())),
                Err(err) => (ShareOutcome::Failed(err), Some(self.config.clipboard_failed_notice.clone())),
            },
        };

        match &outcome {
            ShareOutcome::Completed => log::info!("shared to {}", intent.destination),
            ShareOutcome::Cancelled => log::info!("share to {} cancelled", intent.destination),
            ShareOutcome::Failed(err) => log::warn!("share to {} failed: {err}", intent.destination),
            ShareOutcome::Unsupported | ShareOutcome::NotReady => {}
        }

        self.update(|s| s.end_share(notice));
        outcome
    }

    /// Close the share modal and discard the stored image.
    pub fn close(&self) {
        self.update(ShareSession::close);
    }

    pub fn dismiss_notice(&self) {
        self.update(ShareSession::dismiss_notice);
    }

    pub fn dismiss_error(&self) {
        self.update(ShareSession::dismiss_error);
    }

    fn update<T>(&self, change: impl FnOnce(&mut ShareSession) -> T) -> T {
        let (out, snapshot) = {
            let mut session = self.session.borrow_mut();
            let out = change(&mut session);
            (out, session.clone())
        };
        if let Some(observer) = &self.observer {
            observer(&snapshot);
        }
        out
    }
}

fn completed(result: Result<(), ShareError>) -> ShareOutcome {
    match result {
        Ok(()) => ShareOutcome::Completed,
        Err(ShareError::Cancelled) => ShareOutcome::Cancelled,
        Err(err) => ShareOutcome::Failed(err),
    }
}
