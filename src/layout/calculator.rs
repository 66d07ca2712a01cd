//! The layout calculator.
//!
//! `compute_layout` is THE canonical height implementation: the rendering
//! collaborator asks it for every visible entry's geometry and never
//! measures anything itself.
//!
//! # Contract
//! - Pure: no side effects, no shared mutable state.
//! - Deterministic: identical `(descriptor, width, metrics, measurer)`
//!   inputs yield identical output. Required for caching and for tests.
//! - Total: every descriptor is a valid input, including empty text.

use crate::feed::CellDescriptor;
use crate::layout::geometry::Rect;
use crate::layout::metrics::LayoutMetrics;
use crate::layout::text::TextMeasurer;

/// Computed geometry for one review cell at one container width.
///
/// Ephemeral: recomputed whenever the width or the descriptor's truncation
/// state changes, or served from [`crate::layout::LayoutCache`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Avatar frame (fixed square at the top-left inset).
    pub avatar_frame: Rect,
    /// Name label frame, right of the avatar.
    pub name_frame: Rect,
    /// Rating glyph frame below the name.
    pub rating_frame: Rect,
    /// One frame per photo slot, left to right. Empty when no photos.
    pub photo_frames: Vec<Rect>,
    /// Text block frame. Degenerate when the text is empty.
    pub text_frame: Rect,
    /// Toggle affordance frame. Degenerate unless the affordance shows.
    pub toggle_frame: Rect,
    /// Timestamp label frame, always last in the flow.
    pub created_frame: Rect,
    /// Total cell height including the bottom inset.
    pub total_height: f32,
    /// Whether the truncated text warrants a "show more" affordance.
    pub shows_expand_affordance: bool,
}

/// Compute the full geometry of a review cell.
///
/// The vertical flow is: avatar/name row, rating, optional photo strip,
/// optional text block, optional toggle affordance, timestamp. The gap
/// below the rating row differs depending on whether photos follow; empty
/// text skips the text block and the affordance entirely, contributing no
/// spacing of its own.
///
/// The affordance shows iff the text is truncated *strictly*: a bounded
/// height exactly equal to the full height shows nothing, and
/// `max_lines == 0` (the expanded terminal state) never shows it.
pub fn compute_layout(
    descriptor: &CellDescriptor,
    container_width: f32,
    metrics: &LayoutMetrics,
    measurer: &dyn TextMeasurer,
) -> LayoutResult {
    let column_x = metrics.column_x();
    let column_width = metrics.column_width(container_width);
    let mut cursor_y = metrics.insets.top;

    let avatar_frame = Rect::new(metrics.insets.left, cursor_y, metrics.avatar_size);

    let name_frame = Rect::new(
        column_x,
        cursor_y,
        crate::layout::Size::new(column_width, measurer.line_height()),
    );
    cursor_y = name_frame.max_y() + metrics.name_to_rating_spacing;

    let rating_frame = Rect::new(column_x, cursor_y, metrics.rating_size);
    cursor_y = rating_frame.max_y();

    let mut photo_frames = Vec::new();
    if descriptor.photo_refs().is_empty() {
        cursor_y += metrics.rating_to_text_spacing;
    } else {
        cursor_y += metrics.rating_to_photos_spacing;
        let mut x = column_x;
        for _ in descriptor.photo_refs() {
            photo_frames.push(Rect::new(x, cursor_y, metrics.photo_size));
            x += metrics.photo_size.width + metrics.photo_spacing;
        }
        cursor_y += metrics.photo_size.height + metrics.photos_to_text_spacing;
    }

    let mut text_frame = Rect::ZERO;
    let mut toggle_frame = Rect::ZERO;
    let mut shows_expand_affordance = false;

    if !descriptor.display_text().is_empty() {
        let full_height = measurer.text_height(descriptor.display_text(), column_width);
        let bounded_height = if descriptor.max_lines() == 0 {
            full_height
        } else {
            full_height.min(f32::from(descriptor.max_lines()) * measurer.line_height())
        };
        shows_expand_affordance = descriptor.max_lines() != 0 && full_height > bounded_height;

        text_frame = Rect::new(
            column_x,
            cursor_y,
            crate::layout::Size::new(column_width, bounded_height),
        );
        cursor_y = text_frame.max_y() + metrics.text_to_created_spacing;

        if shows_expand_affordance {
            let toggle_size = measurer.line_extent(&metrics.toggle_label, column_width);
            toggle_frame = Rect::new(column_x, cursor_y, toggle_size);
            cursor_y = toggle_frame.max_y() + metrics.toggle_to_created_spacing;
        }
    }

    let created_size = measurer.line_extent(descriptor.created_label(), column_width);
    let created_frame = Rect::new(column_x, cursor_y, created_size);

    LayoutResult {
        avatar_frame,
        name_frame,
        rating_frame,
        photo_frames,
        text_frame,
        toggle_frame,
        created_frame,
        total_height: created_frame.max_y() + metrics.insets.bottom,
        shows_expand_affordance,
    }
}
