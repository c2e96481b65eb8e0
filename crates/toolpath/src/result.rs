//! Result types for toolpath planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use penpath_core::geometry::Point;

/// One ordered draw instruction.
///
/// The stroke is drawn from `start` to `end`. When `lift` is true the pen
/// must be raised, moved from `travel_from` to `start`, and lowered
/// before drawing; otherwise the pen is already at `start` (within the
/// position tolerance) and the draw continues directly.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawStep {
    /// Whether a pen lift precedes this stroke.
    pub lift: bool,

    /// Pen position before this stroke. `None` when the stroke continues
    /// from the previous one without a lift.
    pub travel_from: Option<Point>,

    /// Endpoint the stroke is drawn from.
    pub start: Point,

    /// Endpoint the stroke is drawn to; the pen rests here afterwards.
    pub end: Point,

    /// Pen-up travel distance to reach `start` (0.0 when `lift` is false).
    pub travel_distance: f64,

    /// Drawn stroke length.
    pub draw_distance: f64,
}

/// Result of planning a complete toolpath.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToolpathResult {
    /// Ordered draw steps, exactly one per sequenced segment.
    pub steps: Vec<DrawStep>,

    /// Segment count before consolidation.
    pub segments_in: usize,

    /// Segment count actually drawn (after consolidation).
    pub segments_drawn: usize,

    /// Total pen-down (drawing) distance.
    pub total_draw_distance: f64,

    /// Total pen-up (travel) distance.
    pub total_travel_distance: f64,

    /// Number of pen lifts.
    pub total_lifts: usize,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl ToolpathResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            segments_in: 0,
            segments_drawn: 0,
            total_draw_distance: 0.0,
            total_travel_distance: 0.0,
            total_lifts: 0,
            computation_time_ms: 0,
        }
    }

    /// Returns the total pen movement (drawing + travel).
    pub fn total_distance(&self) -> f64 {
        self.total_draw_distance + self.total_travel_distance
    }

    /// Returns the drawing efficiency (draw distance / total distance).
    pub fn efficiency(&self) -> f64 {
        let total = self.total_distance();
        if total > 0.0 {
            self.total_draw_distance / total
        } else {
            0.0
        }
    }
}

impl Default for ToolpathResult {
    fn default() -> Self {
        Self::new()
    }
}
