//! Scroll-driven prefetch trigger.

/// How many screen-heights of remaining content arm the prefetch trigger.
pub const SCREENS_TO_LOAD_NEXT_PAGE: f32 = 2.5;

/// Whether the scroll position is close enough to the content end that the
/// next page should be requested.
///
/// `target_offset_y` is the predicted resting scroll offset (top edge of
/// the viewport). The trigger fires when the content remaining below the
/// viewport is at most [`SCREENS_TO_LOAD_NEXT_PAGE`] viewport heights.
///
/// Pure predicate: the rendering collaborator calls it from its scroll
/// callback and, when it fires, invokes the session's `request_next_page`.
pub fn should_request_next_page(
    viewport_height: f32,
    content_height: f32,
    target_offset_y: f32,
) -> bool {
    let trigger_distance = viewport_height * SCREENS_TO_LOAD_NEXT_PAGE;
    let remaining_distance = content_height - viewport_height - target_offset_y;
    remaining_distance <= trigger_distance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_remaining_equals_trigger_distance() {
        // viewport 100, content 1000, offset 650: remaining = 250 = 2.5 screens.
        assert!(should_request_next_page(100.0, 1000.0, 650.0));
    }

    #[test]
    fn holds_when_far_from_end() {
        // remaining = 1000 - 100 - 0 = 900 > 250.
        assert!(!should_request_next_page(100.0, 1000.0, 0.0));
    }

    #[test]
    fn fires_at_the_very_end() {
        assert!(should_request_next_page(100.0, 1000.0, 900.0));
    }

    #[test]
    fn fires_when_content_shorter_than_viewport() {
        // Nothing below the fold at all.
        assert!(should_request_next_page(100.0, 50.0, 0.0));
    }
}
