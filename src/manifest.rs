//! Manifest Loader
//!
//! Fetches the photo manifest with the browser `fetch` API.

use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::LoadError;
use crate::models::Photo;

/// Parse a manifest body. Only invalid JSON is an error; a missing or
/// malformed `photos` field yields an empty list.
pub fn parse_manifest(text: &str) -> Result<Vec<Photo>, LoadError> {
    let doc: Value = serde_json::from_str(text).map_err(|e| LoadError::Parse(e.to_string()))?;

    match doc.get("photos") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(photos) => match serde_json::from_value::<Vec<Photo>>(photos.clone()) {
            Ok(photos) => Ok(photos),
            Err(e) => {
                log::warn!("[Manifest] Ignoring malformed photos field: {}", e);
                Ok(Vec::new())
            }
        },
    }
}

/// Fetch and parse the manifest at `url`
pub async fn load_manifest(url: &str) -> Result<Vec<Photo>, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error)?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))?;

    parse_manifest(&text)
}

fn js_error(value: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PHOTOS: &str = r#"{"photos":[
        {"id":"a","title":"Sunset Beach","thumbnail":"t1","original":"o1"},
        {"id":"b","title":"Mountain View","thumbnail":"t2","original":"o2"}
    ]}"#;

    #[test]
    fn test_parse_preserves_order() {
        let photos = parse_manifest(TWO_PHOTOS).unwrap();
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, "a");
        assert_eq!(photos[1].title, "Mountain View");
    }

    #[test]
    fn test_missing_photos_is_empty() {
        assert_eq!(parse_manifest("{}").unwrap(), Vec::<Photo>::new());
        assert_eq!(parse_manifest(r#"{"photos": null}"#).unwrap(), Vec::<Photo>::new());
    }

    #[test]
    fn test_malformed_photos_is_empty() {
        assert!(parse_manifest(r#"{"photos": "nope"}"#).unwrap().is_empty());
        assert!(parse_manifest(r#"{"photos": [{"id": 1}]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(parse_manifest("<html>404</html>"), Err(LoadError::Parse(_))));
    }
}
