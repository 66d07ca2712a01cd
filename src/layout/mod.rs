//! Layout layer: deterministic variable-height cell geometry.
//!
//! # Module Structure
//!
//! - `geometry`: `Point`/`Size`/`Rect` primitives in layout points
//! - `metrics`: `LayoutMetrics` (fixed sizes, insets, and spacings)
//! - `text`: `TextMeasurer` trait + deterministic monospace measurer
//! - `calculator`: `compute_layout`, descriptor + width to `LayoutResult`
//! - `cache`: LRU memo of layout results keyed by `(id, width, max_lines)`
//!
//! The calculator is a pure function: no side effects, no shared mutable
//! state, identical inputs always yield identical output. That property is
//! what makes the cache correct and the tests deterministic.

pub mod cache;
pub mod calculator;
pub mod geometry;
pub mod metrics;
pub mod text;

pub use cache::LayoutCache;
pub use calculator::{compute_layout, LayoutResult};
pub use geometry::{Point, Rect, Size};
pub use metrics::{Insets, LayoutMetrics};
pub use text::{MonoMeasurer, TextMeasurer};
