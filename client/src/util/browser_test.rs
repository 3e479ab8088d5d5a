#![cfg(not(feature = "csr"))]

use super::*;
use futures::executor::block_on;

fn payload() -> SharePayload {
    SharePayload {
        title: "Poetry in the Woods".to_owned(),
        text: "A poem".to_owned(),
        url: "https://woods.example/".to_owned(),
    }
}

#[test]
fn page_url_is_empty_without_browser() {
    assert_eq!(BrowserPlatform.page_url(), "");
}

#[test]
fn native_share_is_not_offered_without_browser() {
    assert!(!BrowserPlatform.supports_native_share());
    assert!(matches!(block_on(BrowserPlatform.native_share(&payload())), Err(ShareError::Unavailable(_))));
}

#[test]
fn clipboard_is_unavailable_without_browser() {
    assert!(matches!(block_on(BrowserPlatform.copy_text("x")), Err(ShareError::Unavailable(_))));
}

#[test]
fn open_and_save_report_unavailable() {
    let image = ExportedImage::new("data:image/png;base64,AAAA".to_owned());
    assert!(matches!(BrowserPlatform.open_url("https://example.com"), Err(ShareError::Unavailable(_))));
    assert!(matches!(BrowserPlatform.save_image(&image, "my_poetry.png"), Err(ShareError::Unavailable(_))));
}
