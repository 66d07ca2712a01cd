//! Text measurement abstraction.
//!
//! The calculator never talks to a font system; it asks a [`TextMeasurer`]
//! for wrapped heights and single-line extents. The default
//! [`MonoMeasurer`] prices every character at a fixed advance times its
//! display-column count (`unicode-width`), which keeps measurement
//! deterministic and toolkit-free. A GUI integration substitutes its own
//! measurer backed by real font metrics.

use crate::layout::geometry::Size;
use unicode_width::UnicodeWidthStr;

/// Measures text for the layout calculator.
///
/// Implementations must be pure: identical inputs yield identical outputs,
/// or layout determinism (and the layout cache) breaks.
pub trait TextMeasurer {
    /// Height of a single line of body text.
    fn line_height(&self) -> f32;

    /// Full height of `text` word-wrapped at `max_width`, unconstrained by
    /// any line limit. Empty text measures zero.
    fn text_height(&self, text: &str, max_width: f32) -> f32;

    /// Natural (unwrapped) bounding box of a single-line label, clamped to
    /// `max_width`.
    fn line_extent(&self, text: &str, max_width: f32) -> Size;
}

/// Deterministic fixed-advance measurer.
///
/// Wide glyphs (CJK, emoji) occupy two columns per `unicode-width`, so the
/// measurer is not naive byte counting, but it knows nothing about kerning
/// or ligatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonoMeasurer {
    /// Horizontal advance of one display column, in points.
    pub advance: f32,
    /// Line height in points.
    pub line_height: f32,
}

impl Default for MonoMeasurer {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 16.0,
        }
    }
}

impl MonoMeasurer {
    /// Create a measurer with explicit metrics.
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// Number of display columns available at `max_width`. At least 1 so
    /// degenerate widths cannot divide by zero.
    fn columns(&self, max_width: f32) -> usize {
        ((max_width / self.advance).floor() as usize).max(1)
    }

    /// Greedy word wrap: number of lines `text` occupies at `max_width`.
    ///
    /// Hard newlines always break; words wider than the available columns
    /// are broken mid-word. Empty text occupies zero lines.
    pub fn wrapped_line_count(&self, text: &str, max_width: f32) -> usize {
        if text.is_empty() {
            return 0;
        }
        let columns = self.columns(max_width);
        let mut total = 0usize;
        for line in text.lines() {
            total += wrap_one_line(line, columns);
        }
        // A trailing newline adds a final empty line.
        if text.ends_with('\n') {
            total += 1;
        }
        total
    }
}

/// Lines needed for one hard line at the given column budget.
fn wrap_one_line(line: &str, columns: usize) -> usize {
    if line.is_empty() {
        return 1;
    }
    let mut lines = 1usize;
    let mut used = 0usize;
    for word in line.split_whitespace() {
        let word_cols = word.width();
        let needed = if used == 0 { word_cols } else { used + 1 + word_cols };
        if needed <= columns {
            used = needed;
            continue;
        }
        if word_cols <= columns {
            // Wrap to a fresh line.
            lines += 1;
            used = word_cols;
        } else {
            // Word wider than the budget: break mid-word across full lines.
            let chunks = word_cols.div_ceil(columns);
            lines += if used == 0 { chunks - 1 } else { chunks };
            used = word_cols - (chunks - 1) * columns;
        }
    }
    lines
}

impl TextMeasurer for MonoMeasurer {
    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn text_height(&self, text: &str, max_width: f32) -> f32 {
        self.wrapped_line_count(text, max_width) as f32 * self.line_height
    }

    fn line_extent(&self, text: &str, max_width: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let natural = text.width() as f32 * self.advance;
        Size::new(natural.min(max_width), self.line_height)
    }
}
