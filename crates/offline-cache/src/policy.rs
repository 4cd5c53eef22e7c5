//! Cache Policy
//!
//! Which responses are stored and which caches are stale.

/// Current cache generation. Bump it to drop every older cache on activation.
pub const CACHE_NAME: &str = "gallery-photos-v1";

/// App shell stored on install
pub const PRECACHE_URLS: [&str; 4] = ["/", "/index.html", "/css/style.css", "/photos.json"];

/// URL fragments marking cacheable image assets
const CACHEABLE_MARKERS: [&str; 4] = ["optimized/", ".jpg", ".jpeg", ".png"];

/// A network response is stored only if it is a successful same-origin
/// (`basic`) response for an image asset.
pub fn should_store(status: u16, is_basic: bool, url: &str) -> bool {
    status == 200 && is_basic && CACHEABLE_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Cache names left over from older generations
pub fn stale_caches<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    names.into_iter().filter(|name| *name != CACHE_NAME).collect()
}
