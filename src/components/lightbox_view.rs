//! Lightbox Component
//!
//! Full-resolution viewer over the filtered photos.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_gallery_store, GalleryEvent, GalleryStateStoreFields};

#[component]
pub fn LightboxView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_gallery_store();
    let slide = ctx.slide;
    let dimmed = ctx.dimmed;

    let is_open = move || store.lightbox().get().is_open();

    let src = move || slide.with(|s| s.as_ref().map(|s| s.src.clone()).unwrap_or_default());
    let title = move || slide.with(|s| s.as_ref().map(|s| s.title.clone()).unwrap_or_default());
    let counter = move || slide.with(|s| s.as_ref().map(|s| s.counter.clone()).unwrap_or_default());

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:active=is_open
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open()).to_string()
        >
            <div class="lightbox-overlay" on:click=move |_| ctx.dispatch(GalleryEvent::CloseLightbox)></div>
            <div class="lightbox-content">
                <button
                    type="button"
                    class="lightbox-close"
                    aria-label="Close"
                    on:click=move |_| ctx.dispatch(GalleryEvent::CloseLightbox)
                >
                    "✕"
                </button>
                <button
                    type="button"
                    class="lightbox-prev"
                    aria-label="Previous photo"
                    on:click=move |_| ctx.dispatch(GalleryEvent::Previous)
                >
                    "‹"
                </button>
                <figure class="lightbox-figure">
                    <img
                        id="lightbox-image"
                        class="lightbox-image"
                        src=src
                        alt=title
                        style:opacity=move || if dimmed.get() { "0.5" } else { "1" }
                    />
                    <figcaption class="lightbox-info">
                        <span id="lightbox-title" class="lightbox-title">{title}</span>
                        <span id="lightbox-counter" class="lightbox-counter">{counter}</span>
                    </figcaption>
                </figure>
                <button
                    type="button"
                    class="lightbox-next"
                    aria-label="Next photo"
                    on:click=move |_| ctx.dispatch(GalleryEvent::Next)
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
