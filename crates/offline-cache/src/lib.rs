//! Offline Cache Worker
//!
//! Cache-first service worker for the gallery. `sw.js` binds the worker
//! events and forwards them to the exported handlers below.

pub mod policy;

use js_sys::{Array, Promise};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};
use web_sys::{Cache, CacheStorage, Request, Response, ResponseType, ServiceWorkerGlobalScope};

use policy::{should_store, stale_caches, CACHE_NAME, PRECACHE_URLS};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("not running in a service worker")]
    NoScope,

    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for CacheError {
    fn from(value: JsValue) -> Self {
        CacheError::Js(format!("{:?}", value))
    }
}

impl From<CacheError> for JsValue {
    fn from(error: CacheError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    let _ = rolling_logger::init(log::LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY);
}

/// Install: store the app shell
#[wasm_bindgen]
pub fn handle_install() -> Promise {
    future_to_promise(async move {
        let cache = open_cache(&caches()?).await?;
        let urls: Array = PRECACHE_URLS.iter().map(|url| JsValue::from_str(url)).collect();
        JsFuture::from(cache.add_all_with_str_sequence(&urls)).await?;
        log::info!("[OfflineCache] Cache opened, {} URLs stored", PRECACHE_URLS.len());
        Ok(JsValue::UNDEFINED)
    })
}

/// Fetch: serve from cache, else from network (storing image assets)
#[wasm_bindgen]
pub fn handle_fetch(request: Request) -> Promise {
    future_to_promise(async move {
        let response = respond(request).await?;
        Ok(response.into())
    })
}

/// Activate: delete caches from older generations
#[wasm_bindgen]
pub fn handle_activate() -> Promise {
    future_to_promise(async move {
        let caches = caches()?;
        let keys: Array = JsFuture::from(caches.keys()).await?.dyn_into()?;
        let names: Vec<String> = keys.iter().filter_map(|key| key.as_string()).collect();

        for name in stale_caches(names.iter().map(String::as_str)) {
            log::info!("[OfflineCache] Deleting cache: {}", name);
            JsFuture::from(caches.delete(name)).await?;
        }
        Ok(JsValue::UNDEFINED)
    })
}

async fn respond(request: Request) -> Result<Response, CacheError> {
    let scope = scope()?;
    let caches = scope.caches()?;

    let cached = JsFuture::from(caches.match_with_request(&request)).await?;
    if !cached.is_undefined() {
        return Ok(cached.dyn_into()?);
    }

    let response: Response = JsFuture::from(scope.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    let is_basic = response.type_() == ResponseType::Basic;
    if should_store(response.status(), is_basic, &request.url()) {
        let copy = response.clone()?;
        spawn_local(async move {
            if let Err(e) = store(&caches, &request, &copy).await {
                log::warn!("[OfflineCache] Failed to store {}: {}", request.url(), e);
            }
        });
    }

    Ok(response)
}

async fn store(caches: &CacheStorage, request: &Request, response: &Response) -> Result<(), CacheError> {
    let cache = open_cache(caches).await?;
    JsFuture::from(cache.put_with_request(request, response)).await?;
    Ok(())
}

async fn open_cache(caches: &CacheStorage) -> Result<Cache, CacheError> {
    Ok(JsFuture::from(caches.open(CACHE_NAME)).await?.dyn_into()?)
}

fn scope() -> Result<ServiceWorkerGlobalScope, CacheError> {
    js_sys::global()
        .dyn_into::<ServiceWorkerGlobalScope>()
        .map_err(|_| CacheError::NoScope)
}

fn caches() -> Result<CacheStorage, CacheError> {
    Ok(scope()?.caches()?)
}
