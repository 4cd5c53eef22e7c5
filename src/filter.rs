//! Search Filtering
//!
//! Case-insensitive substring search over photo titles and ids.

use crate::models::Photo;

/// Trim and lowercase a raw search term
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Photos whose title or id contains `term`, in manifest order.
/// An empty (or whitespace-only) term returns every photo.
pub fn filter_photos(all: &[Photo], term: &str) -> Vec<Photo> {
    let term = normalize_term(term);
    if term.is_empty() {
        return all.to_vec();
    }

    all.iter()
        .filter(|photo| {
            photo.title.to_lowercase().contains(&term) || photo.id.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Toolbar counter: `12 photos` or `3 / 12 photos` while filtering
pub fn photo_counter_text(filtered: usize, total: usize) -> String {
    let suffix = if total > 1 { "s" } else { "" };
    if filtered == total {
        format!("{} photo{}", total, suffix)
    } else {
        format!("{} / {} photo{}", filtered, total, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_photo(id: &str, title: &str) -> Photo {
        Photo {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: format!("thumbs/{}.jpg", id),
            original: format!("optimized/{}.jpg", id),
        }
    }

    fn sample() -> Vec<Photo> {
        vec![
            make_photo("a", "Sunset Beach"),
            make_photo("b", "Mountain View"),
            make_photo("beach-02", "Harbor"),
            make_photo("d", "City at Night"),
        ]
    }

    fn ids(photos: &[Photo]) -> Vec<&str> {
        photos.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_term_is_identity() {
        let all = sample();
        assert_eq!(filter_photos(&all, ""), all);
        assert_eq!(filter_photos(&all, "   "), all);
        assert!(filter_photos(&[], "").is_empty());
    }

    #[test]
    fn test_matches_title_or_id_case_insensitive() {
        let all = sample();
        assert_eq!(ids(&filter_photos(&all, "BEACH")), vec!["a", "beach-02"]);
        assert_eq!(ids(&filter_photos(&all, "  view ")), vec!["b"]);
        assert_eq!(ids(&filter_photos(&all, "t")), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let all = sample();
        for term in ["a", "n", "ch", "o", "zzz"] {
            let result = filter_photos(&all, term);
            let positions: Vec<usize> = result
                .iter()
                .map(|p| all.iter().position(|q| q == p).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for photo in &result {
                assert!(
                    photo.title.to_lowercase().contains(term) || photo.id.to_lowercase().contains(term)
                );
            }
        }
    }

    #[test]
    fn test_no_fuzzy_matching() {
        let all = sample();
        // "snbch" would fuzzy-match "Sunset Beach" but is not a substring
        assert!(filter_photos(&all, "snbch").is_empty());
    }

    #[test]
    fn test_counter_text() {
        assert_eq!(photo_counter_text(0, 0), "0 photo");
        assert_eq!(photo_counter_text(1, 1), "1 photo");
        assert_eq!(photo_counter_text(12, 12), "12 photos");
        assert_eq!(photo_counter_text(3, 12), "3 / 12 photos");
    }
}
