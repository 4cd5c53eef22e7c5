//! Gallery Configuration
//!
//! Optional overrides are read from an inline
//! `<script id="gallery-config" type="application/json">` element.
//! Every field has a default, so an absent element or a partial object works.

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id holding the JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Photo manifest location
    pub manifest_url: String,
    /// Trailing-edge debounce for window resize
    pub resize_debounce_ms: u32,
    /// Dim duration when the lightbox swaps photos
    pub fade_delay_ms: u32,
    /// IntersectionObserver root margin for lazy thumbnails
    pub lazy_root_margin: String,
    /// Offline-cache worker script, `None` disables registration
    pub service_worker_url: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            manifest_url: "photos.json".to_string(),
            resize_debounce_ms: 250,
            fade_delay_ms: 150,
            lazy_root_margin: "50px".to_string(),
            service_worker_url: Some("/sw.js".to_string()),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => Self::from_json(&text).unwrap_or_else(|e| {
                log::warn!("[Config] {}, using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.manifest_url, "photos.json");
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.fade_delay_ms, 150);
        assert_eq!(config.lazy_root_margin, "50px");
    }

    #[test]
    fn test_partial_override() {
        let config = GalleryConfig::from_json(r#"{"manifest_url": "/data/album.json"}"#).unwrap();
        assert_eq!(config.manifest_url, "/data/album.json");
        assert_eq!(config.resize_debounce_ms, 250);
    }

    #[test]
    fn test_disable_service_worker() {
        let config = GalleryConfig::from_json(r#"{"service_worker_url": null}"#).unwrap();
        assert_eq!(config.service_worker_url, None);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GalleryConfig::from_json("{manifest_url"),
            Err(ConfigError::Parse(_))
        ));
    }
}
