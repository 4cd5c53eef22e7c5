//! Frontend Models
//!
//! Data structures matching the photo manifest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Photo entry (matches manifest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub original: String,
}

/// Gallery layout mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
    Masonry,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Grid, ViewMode::List, ViewMode::Masonry];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
            ViewMode::Masonry => "masonry",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Masonry => "Masonry",
        }
    }

    /// Class list for the gallery container, e.g. `gallery masonry-view`
    pub fn gallery_class(self) -> String {
        format!("gallery {}-view", self.as_str())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            "masonry" => Ok(ViewMode::Masonry),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}
