//! DOM Helpers

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Window width in CSS pixels, 0 if unavailable
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Start loading an image without attaching it to the document
pub fn preload_image(url: &str) {
    match web_sys::HtmlImageElement::new() {
        Ok(img) => img.set_src(url),
        Err(e) => log::warn!("[Preload] Failed to create image for {}: {:?}", url, e),
    }
}

/// Suppress or restore scrolling of the page behind the lightbox
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!("[Lightbox] Failed to update scroll lock: {:?}", e);
    }
}

/// Whether `name` exists on `target`
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Expose the recent-log dump as `window[name]()`, for pasting into bug reports
pub fn expose_log_dump(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dump = Closure::<dyn Fn() -> String>::new(rolling_logger::recent_log_text);
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(name), dump.as_ref()) {
        log::warn!("[Main] Failed to expose {}: {:?}", name, e);
    }
    dump.forget();
}
