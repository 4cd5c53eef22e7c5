//! Application Context
//!
//! Shared handle provided via Leptos Context API. All UI events go through
//! `AppContext::dispatch`, which updates the store and runs the resulting
//! side effects.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::GalleryConfig;
use crate::dom;
use crate::lightbox::SwapSequence;
use crate::manifest::load_manifest;
use crate::store::{apply_event, GalleryEvent, GalleryStore, LightboxSlide, SideEffect};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: GalleryStore,
    pub config: StoredValue<GalleryConfig>,
    /// Slide shown in the lightbox - read
    pub slide: ReadSignal<Option<LightboxSlide>>,
    /// Slide shown in the lightbox - write
    set_slide: WriteSignal<Option<LightboxSlide>>,
    /// Lightbox image dimmed during a photo swap - read
    pub dimmed: ReadSignal<bool>,
    /// Lightbox image dimmed during a photo swap - write
    set_dimmed: WriteSignal<bool>,
    /// A delayed swap is dropped once a newer slide was requested
    swaps: StoredValue<SwapSequence>,
}

impl AppContext {
    pub fn new(store: GalleryStore, config: GalleryConfig) -> Self {
        let (slide, set_slide) = signal(None::<LightboxSlide>);
        let (dimmed, set_dimmed) = signal(false);
        Self {
            store,
            config: StoredValue::new(config),
            slide,
            set_slide,
            dimmed,
            set_dimmed,
            swaps: StoredValue::new(SwapSequence::default()),
        }
    }

    /// Apply one event to the store, then run its side effects
    pub fn dispatch(&self, event: GalleryEvent) {
        let effects = apply_event(self.store, event);
        for effect in effects {
            self.run(effect);
        }
    }

    /// Fetch the manifest. Also used by the Retry button.
    pub fn load_photos(&self) {
        self.dispatch(GalleryEvent::LoadStarted);
        let url = self.config.with_value(|c| c.manifest_url.clone());
        let ctx = *self;
        spawn_local(async move {
            let result = load_manifest(&url).await;
            ctx.dispatch(GalleryEvent::Loaded(result));
        });
    }

    fn run(&self, effect: SideEffect) {
        match effect {
            SideEffect::Preload(url) => dom::preload_image(&url),
            SideEffect::LockScroll(locked) => dom::set_scroll_locked(locked),
            SideEffect::Show { slide, fade } => {
                let mut ticket = 0;
                self.swaps.update_value(|swaps| ticket = swaps.next_ticket());
                if !fade {
                    self.set_dimmed.set(false);
                    self.set_slide.set(Some(slide));
                    return;
                }

                self.set_dimmed.set(true);
                let set_slide = self.set_slide;
                let set_dimmed = self.set_dimmed;
                let swaps = self.swaps;
                let delay = self.config.with_value(|c| c.fade_delay_ms);
                Timeout::new(delay, move || {
                    if !swaps.with_value(|swaps| swaps.is_latest(ticket)) {
                        return;
                    }
                    set_slide.set(Some(slide));
                    set_dimmed.set(false);
                })
                .forget();
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
