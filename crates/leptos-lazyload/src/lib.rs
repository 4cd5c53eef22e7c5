//! Leptos LazyLoad Utilities
//!
//! Deferred image loading for Leptos. Images carry their real source in a
//! `data-src` attribute and get `src` once they come near the viewport.
//! Without IntersectionObserver every image loads immediately.

use leptos::html::Img;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute holding the deferred image source
pub const DATA_SRC: &str = "data-src";

/// Fade-in transition applied to deferred images
const FADE_TRANSITION: &str = "opacity 0.3s ease";

/// How deferred images get loaded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Load when intersecting the (margin-extended) viewport
    Observe,
    /// Load right away
    Immediate,
}

/// Check whether the browser exposes IntersectionObserver
pub fn detect_strategy() -> Strategy {
    let supported = web_sys::window()
        .map(|win| js_sys::Reflect::has(&win, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false);
    if supported {
        Strategy::Observe
    } else {
        Strategy::Immediate
    }
}

/// Shared loader, one per page
#[derive(Clone)]
pub struct LazyLoader {
    observer: Option<IntersectionObserver>,
}

/// Context handle for the loader (JS objects are not `Send`)
pub type LazyLoaderHandle = StoredValue<LazyLoader, LocalStorage>;

impl LazyLoader {
    /// Create a loader. `root_margin` extends the viewport, e.g. `"50px"`.
    pub fn new(root_margin: &str) -> Self {
        let observer = match detect_strategy() {
            Strategy::Observe => create_observer(root_margin),
            Strategy::Immediate => None,
        };
        if observer.is_none() {
            log::info!("[LazyLoad] IntersectionObserver unavailable, loading images immediately");
        }
        Self { observer }
    }

    pub fn strategy(&self) -> Strategy {
        if self.observer.is_some() {
            Strategy::Observe
        } else {
            Strategy::Immediate
        }
    }

    /// Register a deferred image
    pub fn observe(&self, img: &HtmlImageElement) {
        match &self.observer {
            Some(observer) => {
                let style = HtmlElement::style(img);
                let _ = style.set_property("opacity", "0");
                let _ = style.set_property("transition", FADE_TRANSITION);
                observer.observe(img);
            }
            None => load_image(img),
        }
    }

    /// Stop watching every registered image. Called before a re-render so
    /// the observer does not keep detached nodes alive.
    pub fn reset(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }

    /// Put the loader into context as a `LazyLoaderHandle`
    pub fn provide(self) -> LazyLoaderHandle {
        let handle = StoredValue::new_local(self);
        provide_context(handle);
        handle
    }
}

/// Swap `data-src` into `src` and fade in once loaded
pub fn load_image(img: &HtmlImageElement) {
    let Some(src) = img.get_attribute(DATA_SRC) else {
        return;
    };

    let target = img.clone();
    let on_load = Closure::once_into_js(move || {
        let _ = HtmlElement::style(&target).set_property("opacity", "1");
    });
    img.set_onload(Some(on_load.unchecked_ref()));

    img.set_src(&src);
    let _ = img.remove_attribute(DATA_SRC);
}

/// Observe an `<img>` once it is mounted
pub fn lazy_image(loader: LazyLoaderHandle, node_ref: NodeRef<Img>) {
    Effect::new(move |_| {
        if let Some(img) = node_ref.get() {
            loader.with_value(|l| l.observe(&img));
        }
    });
}

fn create_observer(root_margin: &str) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(img) = target.dyn_ref::<HtmlImageElement>() {
                    load_image(img);
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    callback.forget();

    match observer {
        Ok(observer) => Some(observer),
        Err(e) => {
            log::warn!("[LazyLoad] Failed to create IntersectionObserver: {:?}", e);
            None
        }
    }
}
