//! Offline Cache Registration
//!
//! Registers the offline-cache worker. Failure only costs cache hits.

use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::dom::has_property;

pub fn register_service_worker(url: Option<String>) {
    let Some(url) = url else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    if !has_property(&navigator, "serviceWorker") {
        log::info!("[OfflineCache] Service workers unsupported");
        return;
    }

    let promise = navigator.service_worker().register(&url);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[OfflineCache] Registered {}", url),
            Err(e) => log::warn!("[OfflineCache] Registration of {} failed: {:?}", url, e),
        }
    });
}
