//! Gallery State Store
//!
//! One `GalleryState` is built at startup and provided via context. Every
//! external signal (keystroke, click, resize, fetch completion) becomes a
//! `GalleryEvent`; `dispatch` applies it synchronously and returns the side
//! effects the UI layer has to perform.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::LoadError;
use crate::filter::{filter_photos, photo_counter_text};
use crate::layout::masonry_columns;
use crate::lightbox::{Lightbox, LightboxKey};
use crate::models::{Photo, ViewMode};

/// Manifest load progress
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    /// User-facing message; the gallery offers a retry
    Failed(String),
}

/// Gallery session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Every photo in manifest order, fixed after load
    pub all_photos: Vec<Photo>,
    /// Photos matching `search_term`, always a subsequence of `all_photos`
    pub filtered: Vec<Photo>,
    /// Raw search input
    pub search_term: String,
    pub view_mode: ViewMode,
    /// Only set while the masonry layout is active
    pub masonry_columns: Option<u32>,
    /// Cursor over `filtered`
    pub lightbox: Lightbox,
    pub status: LoadStatus,
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

/// Apply one event to the store and return its side effects.
///
/// The event runs against a snapshot; only fields whose value changed are
/// written back, so a lightbox or resize event never notifies subscribers of
/// the photo list.
pub fn apply_event(store: GalleryStore, event: GalleryEvent) -> Vec<SideEffect> {
    let mut next = store.get_untracked();
    let effects = next.dispatch(event);
    let GalleryState {
        all_photos,
        filtered,
        search_term,
        view_mode,
        masonry_columns,
        lightbox,
        status,
    } = next;

    if store.all_photos().with_untracked(|v| *v != all_photos) {
        *store.all_photos().write() = all_photos;
    }
    if store.filtered().with_untracked(|v| *v != filtered) {
        *store.filtered().write() = filtered;
    }
    if store.search_term().with_untracked(|v| *v != search_term) {
        *store.search_term().write() = search_term;
    }
    if store.view_mode().get_untracked() != view_mode {
        *store.view_mode().write() = view_mode;
    }
    if store.masonry_columns().get_untracked() != masonry_columns {
        *store.masonry_columns().write() = masonry_columns;
    }
    if store.lightbox().get_untracked() != lightbox {
        *store.lightbox().write() = lightbox;
    }
    if store.status().with_untracked(|v| *v != status) {
        *store.status().write() = status;
    }
    effects
}

/// What the gallery area shows
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    Loading,
    /// Load failed; offers a retry
    Failed(String),
    /// Loaded, but nothing matches the search; offers to clear it
    Empty,
    Photos,
}

impl GridContent {
    pub fn from_status(status: &LoadStatus, filtered_len: usize) -> Self {
        match status {
            LoadStatus::Loading => GridContent::Loading,
            LoadStatus::Failed(message) => GridContent::Failed(message.clone()),
            LoadStatus::Ready if filtered_len == 0 => GridContent::Empty,
            LoadStatus::Ready => GridContent::Photos,
        }
    }

    /// Label of the recovery button, if any
    pub fn action_label(&self) -> Option<&'static str> {
        match self {
            GridContent::Failed(_) => Some("Retry"),
            GridContent::Empty => Some("Clear search"),
            GridContent::Loading | GridContent::Photos => None,
        }
    }
}

/// External signal, handled in a single turn
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryEvent {
    /// A (re)load of the manifest started
    LoadStarted,
    Loaded(Result<Vec<Photo>, LoadError>),
    Search(String),
    ClearSearch,
    SetView { mode: ViewMode, viewport_width: f64 },
    Resized { viewport_width: f64 },
    OpenLightbox(usize),
    CloseLightbox,
    Previous,
    Next,
    Key(LightboxKey),
}

/// What the lightbox should display
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxSlide {
    pub src: String,
    pub title: String,
    pub counter: String,
}

/// Side effect requested by `dispatch`
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    /// Fire-and-forget fetch of a full-resolution image
    Preload(String),
    /// Suppress (true) or restore (false) background scrolling
    LockScroll(bool),
    /// Display a slide, dimming first when `fade` is set
    Show { slide: LightboxSlide, fade: bool },
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Photo under the lightbox cursor
    pub fn current_photo(&self) -> Option<&Photo> {
        self.lightbox
            .current_index()
            .and_then(|index| self.filtered.get(index))
    }

    /// Toolbar counter text
    pub fn counter_text(&self) -> String {
        photo_counter_text(self.filtered.len(), self.all_photos.len())
    }

    pub fn dispatch(&mut self, event: GalleryEvent) -> Vec<SideEffect> {
        match event {
            GalleryEvent::LoadStarted => {
                let effects = self.close_lightbox();
                self.status = LoadStatus::Loading;
                self.all_photos.clear();
                self.filtered.clear();
                effects
            }
            GalleryEvent::Loaded(Ok(photos)) => {
                log::info!("[Gallery] Loaded {} photos", photos.len());
                let effects = self.close_lightbox();
                self.all_photos = photos;
                self.filtered = filter_photos(&self.all_photos, &self.search_term);
                self.status = LoadStatus::Ready;
                effects
            }
            GalleryEvent::Loaded(Err(e)) => {
                log::error!("[Gallery] Failed to load photos: {}", e);
                let effects = self.close_lightbox();
                self.all_photos.clear();
                self.filtered.clear();
                self.status = LoadStatus::Failed(e.user_message().to_string());
                effects
            }
            GalleryEvent::Search(term) => self.apply_search(term),
            GalleryEvent::ClearSearch => self.apply_search(String::new()),
            GalleryEvent::SetView {
                mode,
                viewport_width,
            } => {
                self.view_mode = mode;
                self.masonry_columns =
                    (mode == ViewMode::Masonry).then(|| masonry_columns(viewport_width));
                Vec::new()
            }
            GalleryEvent::Resized { viewport_width } => {
                if self.view_mode == ViewMode::Masonry {
                    self.masonry_columns = Some(masonry_columns(viewport_width));
                }
                Vec::new()
            }
            GalleryEvent::OpenLightbox(index) => {
                if !self.lightbox.open(index, self.filtered.len()) {
                    log::warn!(
                        "[Lightbox] Ignoring open at {} ({} photos)",
                        index,
                        self.filtered.len()
                    );
                    return Vec::new();
                }
                let mut effects = vec![SideEffect::LockScroll(true)];
                effects.extend(self.show_current(false));
                effects
            }
            GalleryEvent::CloseLightbox => self.close_lightbox(),
            GalleryEvent::Previous => match self.lightbox.previous() {
                Some(_) => self.show_current(true),
                None => Vec::new(),
            },
            GalleryEvent::Next => match self.lightbox.next(self.filtered.len()) {
                Some(_) => self.show_current(true),
                None => Vec::new(),
            },
            GalleryEvent::Key(key) => {
                if !self.lightbox.is_open() {
                    return Vec::new();
                }
                let event = match key {
                    LightboxKey::Escape => GalleryEvent::CloseLightbox,
                    LightboxKey::ArrowLeft => GalleryEvent::Previous,
                    LightboxKey::ArrowRight => GalleryEvent::Next,
                };
                self.dispatch(event)
            }
        }
    }

    // A new filtered list invalidates the cursor, so an open lightbox closes.
    fn apply_search(&mut self, term: String) -> Vec<SideEffect> {
        self.search_term = term;
        self.filtered = filter_photos(&self.all_photos, &self.search_term);
        self.close_lightbox()
    }

    fn close_lightbox(&mut self) -> Vec<SideEffect> {
        if self.lightbox.close() {
            vec![SideEffect::LockScroll(false)]
        } else {
            Vec::new()
        }
    }

    fn show_current(&self, fade: bool) -> Vec<SideEffect> {
        let Some(photo) = self.current_photo() else {
            return Vec::new();
        };
        let len = self.filtered.len();
        let mut effects = vec![SideEffect::Show {
            slide: LightboxSlide {
                src: photo.original.clone(),
                title: photo.title.clone(),
                counter: self.lightbox.counter_text(len),
            },
            fade,
        }];
        effects.extend(
            self.lightbox
                .adjacent_indices(len)
                .into_iter()
                .map(|i| SideEffect::Preload(self.filtered[i].original.clone())),
        );
        effects
    }
}
