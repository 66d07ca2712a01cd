//! Review records as decoded from a page payload.
//!
//! These types mirror the wire shape of one page of review data. They are
//! immutable inputs: decoded once at the boundary ([`crate::parser`]) and
//! never mutated afterwards.

use serde::Deserialize;

/// One review as delivered by the data source. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewRecord {
    /// Reviewer's first name.
    pub first_name: String,
    /// Reviewer's last name.
    pub last_name: String,
    /// Star rating, expected in `0..=5`. Validated during decode.
    pub rating: u8,
    /// Review body text. May be empty.
    pub text: String,
    /// Creation time as supplied by the source. RFC 3339 timestamps are
    /// reformatted for display; anything else passes through verbatim.
    pub created: String,
    /// References to attached photos, in display order. Absent means none.
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    /// Reference to the reviewer's avatar image.
    pub avatar_url: String,
}

impl ReviewRecord {
    /// Full display name, `"first last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Photo references as a slice, empty when the field was absent.
    pub fn photo_refs(&self) -> &[String] {
        self.photos.as_deref().unwrap_or_default()
    }
}

/// One decoded page of reviews.
///
/// `count` is the total number of reviews available on the server, not the
/// number of items in this page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewsPage {
    /// Records in arrival order.
    pub items: Vec<ReviewRecord>,
    /// Total reviews available at the source.
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(first: &str, last: &str) -> ReviewRecord {
        ReviewRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            rating: 4,
            text: "Good".to_string(),
            created: "2025-02-25T10:00:00Z".to_string(),
            photos: None,
            avatar_url: "avatar-1".to_string(),
        }
    }

    #[test]
    fn full_name_joins_first_and_last() {
        assert_eq!(record("Ada", "Lovelace").full_name(), "Ada Lovelace");
    }

    #[test]
    fn photo_refs_empty_when_absent() {
        assert!(record("A", "B").photo_refs().is_empty());
    }

    #[test]
    fn photo_refs_preserve_order() {
        let mut r = record("A", "B");
        r.photos = Some(vec!["p1".to_string(), "p2".to_string()]);
        assert_eq!(r.photo_refs(), ["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn deserializes_without_photos_field() {
        let json = r#"{
            "first_name": "Ada",
            "last_name": "Lovelace",
            "rating": 5,
            "text": "Excellent",
            "created": "25 February 2025",
            "avatar_url": "a"
        }"#;
        let r: ReviewRecord = serde_json::from_str(json).expect("valid record");
        assert_eq!(r.photos, None);
        assert_eq!(r.rating, 5);
    }

    #[test]
    fn deserializes_page_with_count() {
        let json = r#"{
            "items": [],
            "count": 57
        }"#;
        let page: ReviewsPage = serde_json::from_str(json).expect("valid page");
        assert!(page.items.is_empty());
        assert_eq!(page.count, 57);
    }
}
