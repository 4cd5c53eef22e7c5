//! Photo Card Component
//!
//! One gallery item with a lazily loaded thumbnail.

use leptos::html::Img;
use leptos::prelude::*;
use leptos_lazyload::{lazy_image, LazyLoaderHandle};

use crate::context::use_app_context;
use crate::models::Photo;
use crate::store::GalleryEvent;

/// Gallery item; clicking it opens the lightbox at `index`
#[component]
pub fn PhotoCard(photo: Photo, index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let loader = expect_context::<LazyLoaderHandle>();

    let img_ref = NodeRef::<Img>::new();
    lazy_image(loader, img_ref);

    let open = move || ctx.dispatch(GalleryEvent::OpenLightbox(index));
    let Photo { id, title, thumbnail, .. } = photo;
    let label = format!("Open {}", title);
    let alt = title.clone();

    view! {
        <article
            class="photo-item"
            role="listitem"
            data-id=id
            data-index=index.to_string()
            on:click=move |_| open()
        >
            <div class="photo-wrapper">
                <img
                    node_ref=img_ref
                    class="photo-image"
                    data-src=thumbnail
                    alt=alt
                    loading="lazy"
                />
                <button
                    type="button"
                    class="photo-button"
                    aria-label=label
                    on:click=move |ev| {
                        ev.stop_propagation();
                        open();
                    }
                >
                    "⤢"
                </button>
            </div>
            <h3 class="photo-title">{title}</h3>
        </article>
    }
}
