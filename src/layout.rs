//! Layout Utilities
//!
//! Geometry for the masonry layout. Grid and list are pure CSS.

use crate::models::ViewMode;

/// Column count for the masonry layout at a given viewport width
pub fn masonry_columns(viewport_width: f64) -> u32 {
    if viewport_width < 480.0 {
        1
    } else if viewport_width < 768.0 {
        2
    } else if viewport_width < 1200.0 {
        3
    } else {
        4
    }
}

/// Inline style for the gallery container
pub fn gallery_style(mode: ViewMode, columns: Option<u32>) -> String {
    match (mode, columns) {
        (ViewMode::Masonry, Some(n)) => format!("column-count: {}", n),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masonry_columns() {
        assert_eq!(masonry_columns(300.0), 1);
        assert_eq!(masonry_columns(600.0), 2);
        assert_eq!(masonry_columns(1000.0), 3);
        assert_eq!(masonry_columns(1400.0), 4);
    }

    #[test]
    fn test_masonry_breakpoints_are_exclusive() {
        assert_eq!(masonry_columns(479.9), 1);
        assert_eq!(masonry_columns(480.0), 2);
        assert_eq!(masonry_columns(768.0), 3);
        assert_eq!(masonry_columns(1200.0), 4);
    }

    #[test]
    fn test_gallery_style() {
        assert_eq!(gallery_style(ViewMode::Masonry, Some(3)), "column-count: 3");
        assert_eq!(gallery_style(ViewMode::Grid, Some(3)), "");
        assert_eq!(gallery_style(ViewMode::Masonry, None), "");
    }
}
