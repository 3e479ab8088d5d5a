//! Export configuration loading.
//!
//! The page may embed overrides as JSON in
//! `<script id="poetry-config" type="application/json">`. Anything missing or
//! malformed falls back to the compiled-in defaults.

use canvas::config::ExportConfig;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Element id of the embedded configuration block.
pub const CONFIG_ELEMENT_ID: &str = "poetry-config";

/// Parse an optional raw JSON block into a config, warning on bad input.
pub fn parse(raw: Option<&str>) -> ExportConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return ExportConfig::default();
    };
    match ExportConfig::from_json(raw) {
        Ok(config) => {
            log::debug!("loaded export config overrides");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            ExportConfig::default()
        }
    }
}

/// Read the configuration embedded in the current document.
pub fn load() -> ExportConfig {
    parse(embedded_json().as_deref())
}

fn embedded_json() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
