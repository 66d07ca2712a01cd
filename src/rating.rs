//! Rating rendering capability.
//!
//! The feed never draws a rating itself; it stores an opaque glyph handle
//! produced by an injected [`RatingRenderer`] when the descriptor is
//! created. A default text renderer is provided for tests and headless use.

use std::fmt;

/// Highest rating a renderer must accept.
pub const MAX_RATING: u8 = 5;

/// Opaque handle to a rendered rating.
///
/// The feed core treats this as pure data; only the rendering collaborator
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RatingGlyph(String);

impl RatingGlyph {
    /// Wrap a renderer-produced handle value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw handle value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RatingGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a numeric rating into an opaque glyph handle.
///
/// Implementations must be pure and total over `0..=MAX_RATING`; the decode
/// boundary guarantees no larger value reaches a renderer.
pub trait RatingRenderer {
    /// Render `rating` filled stars out of [`MAX_RATING`].
    fn render(&self, rating: u8) -> RatingGlyph;
}

/// Default renderer producing a star string, e.g. `"★★★☆☆"` for 3.
///
/// Ratings above [`MAX_RATING`] are clamped so the renderer stays total
/// even on out-of-contract input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarRatingRenderer;

impl RatingRenderer for StarRatingRenderer {
    fn render(&self, rating: u8) -> RatingGlyph {
        let filled = usize::from(rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        let mut glyph = String::with_capacity(usize::from(MAX_RATING) * '★'.len_utf8());
        glyph.extend(std::iter::repeat_n('★', filled));
        glyph.extend(std::iter::repeat_n('☆', empty));
        RatingGlyph(glyph)
    }
}
