//! Photo Grid Component
//!
//! Renders the filtered photos in the active layout, or the loading, error
//! and empty states. Content is rebuilt from scratch whenever the filtered
//! list changes.

use leptos::prelude::*;
use leptos_lazyload::LazyLoaderHandle;

use crate::components::PhotoCard;
use crate::context::use_app_context;
use crate::layout::gallery_style;
use crate::store::{use_gallery_store, GalleryEvent, GalleryStateStoreFields, GridContent};

#[component]
pub fn PhotoGrid() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_gallery_store();
    let loader = expect_context::<LazyLoaderHandle>();

    let gallery_class = move || store.view_mode().get().gallery_class();
    let style = move || gallery_style(store.view_mode().get(), store.masonry_columns().get());

    let content = move || {
        // Cards from the previous render are going away
        loader.with_value(|loader| loader.reset());
        let filtered_len = store.filtered().with(|photos| photos.len());
        let grid = store.status().with(|status| GridContent::from_status(status, filtered_len));
        let action = grid.action_label().unwrap_or_default();
        match grid {
            GridContent::Loading => view! {
                <div class="loading">
                    <p>"Loading photos..."</p>
                </div>
            }
            .into_any(),
            GridContent::Failed(message) => view! {
                <div class="loading error-state">
                    <p class="error-message">{message}</p>
                    <button type="button" class="state-action" on:click=move |_| ctx.load_photos()>
                        {action}
                    </button>
                </div>
            }
            .into_any(),
            GridContent::Empty => view! {
                <div class="loading empty-state">
                    <p>"No photos found."</p>
                    <button
                        type="button"
                        class="state-action"
                        on:click=move |_| ctx.dispatch(GalleryEvent::ClearSearch)
                    >
                        {action}
                    </button>
                </div>
            }
            .into_any(),
            GridContent::Photos => {
                store
                    .filtered()
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, photo)| view! { <PhotoCard photo=photo index=index /> })
                    .collect_view()
                    .into_any()
            }
        }
    };

    view! {
        <main id="gallery" class=gallery_class style=style role="list" aria-live="polite">
            {content}
        </main>
    }
}
