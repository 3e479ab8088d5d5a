//! Browser capabilities behind the share dispatcher's `Platform` seam.
//!
//! Native share and clipboard writes use the typed `web_sys` bindings, after a
//! property check on `navigator` so missing APIs report as unavailable rather
//! than throwing. Without the `csr` feature every capability reports itself
//! unavailable.

use async_trait::async_trait;
use canvas::doc::ExportedImage;
use canvas::error::ShareError;
use canvas::share::{Platform, SharePayload};

#[cfg(feature = "csr")]
use canvas::error::js_message;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(feature = "csr")]
use wasm_bindgen_futures::JsFuture;

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(not(feature = "csr"))]
const NO_BROWSER: &str = "not running in a browser";

/// The live browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

#[cfg(feature = "csr")]
fn window() -> Result<web_sys::Window, ShareError> {
    web_sys::window().ok_or_else(|| ShareError::Unavailable("no window".to_owned()))
}

#[cfg(feature = "csr")]
fn navigator_has(property: &str) -> bool {
    web_sys::window().is_some_and(|w| {
        js_sys::Reflect::has(&w.navigator(), &JsValue::from_str(property)).unwrap_or(false)
    })
}

/// The navigator, if it exposes `property`.
#[cfg(feature = "csr")]
fn navigator_with(property: &str) -> Result<web_sys::Navigator, ShareError> {
    if !navigator_has(property) {
        return Err(ShareError::Unavailable(format!("navigator.{property}")));
    }
    Ok(window()?.navigator())
}

#[async_trait(?Send)]
impl Platform for BrowserPlatform {
    fn page_url(&self) -> String {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "csr"))]
        {
            String::new()
        }
    }

    fn supports_native_share(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            navigator_has("share")
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        #[cfg(feature = "csr")]
        {
            let navigator = navigator_with("share")?;
            let data = web_sys::ShareData::new();
            data.set_title(&payload.title);
            data.set_text(&payload.text);
            data.set_url(&payload.url);
            JsFuture::from(navigator.share_with_data(&data))
                .await
                .map(|_| ())
                .map_err(|e| ShareError::from_js(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payload;
            Err(ShareError::Unavailable(NO_BROWSER.to_owned()))
        }
    }

    async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        #[cfg(feature = "csr")]
        {
            let clipboard = navigator_with("clipboard")?.clipboard();
            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ShareError::from_js(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = text;
            Err(ShareError::Unavailable(NO_BROWSER.to_owned()))
        }
    }

    fn open_url(&self, url: &str) -> Result<(), ShareError> {
        #[cfg(feature = "csr")]
        {
            match window()?
                .open_with_url_and_target(url, "_blank")
                .map_err(|e| ShareError::from_js(&e))?
            {
                Some(_) => Ok(()),
                None => Err(ShareError::Unavailable("popup blocked".to_owned())),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(ShareError::Unavailable(NO_BROWSER.to_owned()))
        }
    }

    fn save_image(&self, image: &ExportedImage, filename: &str) -> Result<(), ShareError> {
        #[cfg(feature = "csr")]
        {
            let document = window()?
                .document()
                .ok_or_else(|| ShareError::Unavailable("no document".to_owned()))?;
            let body = document
                .body()
                .ok_or_else(|| ShareError::Unavailable("no document body".to_owned()))?;
            let anchor = document
                .create_element("a")
                .map_err(|e| ShareError::Failed(js_message(&e)))?
                .dyn_into::<web_sys::HtmlAnchorElement>()
                .map_err(|_| ShareError::Failed("unexpected element type".to_owned()))?;
            anchor.set_href(image.data_uri());
            anchor.set_download(filename);
            body.append_child(&anchor)
                .map_err(|e| ShareError::Failed(js_message(&e)))?;
            anchor.click();
            anchor.remove();
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (image, filename);
            Err(ShareError::Unavailable(NO_BROWSER.to_owned()))
        }
    }
}
