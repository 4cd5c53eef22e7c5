//! UI Components
//!
//! Leptos components for the gallery page.

mod toolbar;
mod photo_grid;
mod photo_card;
mod lightbox_view;

pub use toolbar::Toolbar;
pub use photo_grid::PhotoGrid;
pub use photo_card::PhotoCard;
pub use lightbox_view::LightboxView;
