//! Toolbar Component
//!
//! Search box, photo counter and view-mode buttons.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::dom::viewport_width;
use crate::filter::photo_counter_text;
use crate::models::ViewMode;
use crate::store::{use_gallery_store, GalleryEvent, GalleryStateStoreFields};

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_gallery_store();

    let has_term = move || !store.search_term().with(|term| term.trim().is_empty());

    let counter = move || {
        photo_counter_text(
            store.filtered().with(|photos| photos.len()),
            store.all_photos().with(|photos| photos.len()),
        )
    };

    let view_buttons = ViewMode::ALL
        .into_iter()
        .map(|mode| {
            let is_active = move || store.view_mode().get() == mode;
            view! {
                <button
                    type="button"
                    class="view-btn"
                    class:active=is_active
                    data-view=mode.as_str()
                    aria-pressed=move || is_active().to_string()
                    on:click=move |_| ctx.dispatch(GalleryEvent::SetView {
                        mode,
                        viewport_width: viewport_width(),
                    })
                >
                    {mode.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="gallery-header">
            <div class="search-box">
                <input
                    id="search"
                    type="search"
                    placeholder="Search photos..."
                    autocomplete="off"
                    aria-label="Search photos"
                    prop:value=move || store.search_term().get()
                    on:input=move |ev| ctx.dispatch(GalleryEvent::Search(event_target_value(&ev)))
                />
                <button
                    id="search-clear"
                    type="button"
                    class="search-clear"
                    aria-label="Clear search"
                    style:display=move || if has_term() { "block" } else { "none" }
                    on:click=move |_| ctx.dispatch(GalleryEvent::ClearSearch)
                >
                    "✕"
                </button>
            </div>

            <span id="photo-counter" class="photo-counter">{counter}</span>

            <div class="view-controls" role="group" aria-label="Layout">
                {view_buttons}
            </div>
        </header>
    }
}
