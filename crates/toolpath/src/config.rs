//! Configuration for toolpath planning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for consolidation and sequencing.
///
/// Both tolerances are explicit values rather than embedded constants so
/// the algorithms stay deterministic and testable at multiple scales.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToolpathConfig {
    /// Maximum slope difference for two segments to be considered
    /// collinear candidates during consolidation (EPS_SLOPE).
    pub slope_tolerance: f64,

    /// Maximum Euclidean distance for two coordinates to be treated as
    /// the same spatial point (EPS_POS). Also the threshold below which
    /// the pen continues drawing without a lift.
    pub position_tolerance: f64,

    /// Pen position before the first stroke, in source coordinates.
    /// Default is (0.0, 0.0).
    pub start_position: (f64, f64),

    /// Whether to run the consolidation pass before sequencing.
    /// Sequencing accepts unconsolidated input; it just draws more
    /// redundant strokes.
    pub consolidate: bool,

    /// Whether to drop zero-length segments before planning. Disabled by
    /// default: degenerate segments are valid, trivially short draws.
    pub drop_degenerate: bool,
}

impl Default for ToolpathConfig {
    fn default() -> Self {
        Self {
            slope_tolerance: 0.01,
            position_tolerance: 0.1,
            start_position: (0.0, 0.0),
            consolidate: true,
            drop_degenerate: false,
        }
    }
}

impl ToolpathConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the slope tolerance.
    pub fn with_slope_tolerance(mut self, tolerance: f64) -> Self {
        self.slope_tolerance = tolerance;
        self
    }

    /// Sets the position tolerance.
    pub fn with_position_tolerance(mut self, tolerance: f64) -> Self {
        self.position_tolerance = tolerance;
        self
    }

    /// Sets the starting pen position.
    pub fn with_start_position(mut self, x: f64, y: f64) -> Self {
        self.start_position = (x, y);
        self
    }

    /// Enables or disables the consolidation pass.
    pub fn with_consolidate(mut self, consolidate: bool) -> Self {
        self.consolidate = consolidate;
        self
    }

    /// Enables or disables dropping of zero-length segments.
    pub fn with_drop_degenerate(mut self, drop: bool) -> Self {
        self.drop_degenerate = drop;
        self
    }
}
