//! Photo Gallery App
//!
//! Root component: builds the gallery session and binds window-level input.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use leptos_lazyload::LazyLoader;
use reactive_stores::Store;

use crate::components::{LightboxView, PhotoGrid, Toolbar};
use crate::config::GalleryConfig;
use crate::context::AppContext;
use crate::dom::viewport_width;
use crate::lightbox::LightboxKey;
use crate::offline::register_service_worker;
use crate::store::{GalleryEvent, GalleryState, GalleryStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = GalleryConfig::from_document();

    // One gallery session per page load
    let store = Store::new(GalleryState::new());
    provide_context(store);
    let ctx = AppContext::new(store, config.clone());
    provide_context(ctx);
    LazyLoader::new(&config.lazy_root_margin).provide();

    ctx.load_photos();

    // Lightbox keys, only while open
    let _ = window_event_listener(ev::keydown, move |ev| {
        if !store.lightbox().get_untracked().is_open() {
            return;
        }
        if let Some(key) = LightboxKey::from_key(&ev.key()) {
            if key.prevents_default() {
                ev.prevent_default();
            }
            ctx.dispatch(GalleryEvent::Key(key));
        }
    });

    // Trailing-edge debounce: replacing the pending timeout cancels it
    let pending_resize = StoredValue::new_local(None::<Timeout>);
    let debounce_ms = config.resize_debounce_ms;
    let _ = window_event_listener(ev::resize, move |_| {
        let timeout = Timeout::new(debounce_ms, move || {
            ctx.dispatch(GalleryEvent::Resized {
                viewport_width: viewport_width(),
            });
        });
        pending_resize.set_value(Some(timeout));
    });

    register_service_worker(config.service_worker_url);

    view! {
        <div class="gallery-app">
            <Toolbar />
            <PhotoGrid />
            <LightboxView />
        </div>
    }
}
