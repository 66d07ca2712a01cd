//! Fixed sizes, insets, and spacings used by the layout calculator.
//!
//! All fields are overridable from the `[metrics]` section of the config
//! file; defaults match the reference design.

use crate::layout::geometry::Size;
use serde::Deserialize;

/// Insets from the cell edges to its content.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Insets {
    /// Top inset.
    pub top: f32,
    /// Left inset.
    pub left: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Right inset.
    pub right: f32,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 9.0,
            left: 12.0,
            bottom: 9.0,
            right: 12.0,
        }
    }
}

/// Layout constants for a review cell.
///
/// Two of the vertical gaps deserve a note: the gap below the rating row
/// depends on whether a photo strip follows. With photos, the larger
/// `rating_to_photos_spacing` applies (and `photos_to_text_spacing` after
/// the strip); without photos, the smaller `rating_to_text_spacing` applies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Avatar frame (fixed square).
    pub avatar_size: Size,
    /// Rating glyph frame (fixed rectangle).
    pub rating_size: Size,
    /// One photo slot in the strip.
    pub photo_size: Size,
    /// Insets from the cell edges to content.
    pub insets: Insets,
    /// Horizontal gap between avatar and name label.
    pub avatar_to_name_spacing: f32,
    /// Vertical gap between name label and rating glyph.
    pub name_to_rating_spacing: f32,
    /// Vertical gap between rating and text when there are no photos.
    pub rating_to_text_spacing: f32,
    /// Vertical gap between rating and the photo strip.
    pub rating_to_photos_spacing: f32,
    /// Horizontal gap between photos in the strip.
    pub photo_spacing: f32,
    /// Vertical gap between the photo strip and the text.
    pub photos_to_text_spacing: f32,
    /// Vertical gap between the text block and whatever follows it.
    pub text_to_created_spacing: f32,
    /// Vertical gap between the toggle affordance and the timestamp.
    pub toggle_to_created_spacing: f32,
    /// Label shown on the expand affordance; measured to size its frame.
    pub toggle_label: String,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            avatar_size: Size::new(36.0, 36.0),
            rating_size: Size::new(84.0, 16.0),
            photo_size: Size::new(55.0, 66.0),
            insets: Insets::default(),
            avatar_to_name_spacing: 10.0,
            name_to_rating_spacing: 6.0,
            rating_to_text_spacing: 6.0,
            rating_to_photos_spacing: 10.0,
            photo_spacing: 8.0,
            photos_to_text_spacing: 10.0,
            text_to_created_spacing: 6.0,
            toggle_to_created_spacing: 6.0,
            toggle_label: "Show more...".to_string(),
        }
    }
}

impl LayoutMetrics {
    /// X coordinate of the name column: everything to the right of the
    /// avatar (name, rating, photos, text, timestamp) starts here.
    pub fn column_x(&self) -> f32 {
        self.insets.left + self.avatar_size.width + self.avatar_to_name_spacing
    }

    /// Width of the name column at the given container width. Clamped at
    /// zero for pathologically narrow containers.
    pub fn column_width(&self, container_width: f32) -> f32 {
        (container_width - self.column_x() - self.insets.right).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sizes_match_reference_design() {
        let m = LayoutMetrics::default();
        assert_eq!(m.avatar_size, Size::new(36.0, 36.0));
        assert_eq!(m.rating_size, Size::new(84.0, 16.0));
        assert_eq!(m.photo_size, Size::new(55.0, 66.0));
    }

    #[test]
    fn photo_gap_is_larger_than_text_gap() {
        let m = LayoutMetrics::default();
        assert!(m.rating_to_photos_spacing > m.rating_to_text_spacing);
    }

    #[test]
    fn column_x_accounts_for_inset_avatar_and_gap() {
        let m = LayoutMetrics::default();
        assert_eq!(m.column_x(), 12.0 + 36.0 + 10.0);
    }

    #[test]
    fn column_width_subtracts_both_sides() {
        let m = LayoutMetrics::default();
        assert_eq!(m.column_width(300.0), 300.0 - 58.0 - 12.0);
    }

    #[test]
    fn column_width_clamps_at_zero() {
        let m = LayoutMetrics::default();
        assert_eq!(m.column_width(10.0), 0.0);
    }

    #[test]
    fn deserializes_partial_toml_with_defaults() {
        let m: LayoutMetrics = toml::from_str(
            r#"
            photo_spacing = 4.0
            [avatar_size]
            width = 40.0
            height = 40.0
            "#,
        )
        .expect("valid metrics");
        assert_eq!(m.photo_spacing, 4.0);
        assert_eq!(m.avatar_size, Size::new(40.0, 40.0));
        // Untouched fields keep their defaults.
        assert_eq!(m.rating_size, Size::new(84.0, 16.0));
    }
}
