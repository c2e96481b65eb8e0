//! Toolpath planning for pen-plotter line art.
//!
//! Given a soup of straight line segments (typically extracted from an
//! SVG), this crate computes a physically efficient stroke order for a
//! device that must raise and lower its pen between disjoint strokes.
//!
//! # Algorithm
//!
//! 1. **Consolidation**: Collapse redundant collinear segments produced
//!    by upstream rendering into the minimal set of strokes covering the
//!    same geometry (slope-binned iterative merge to fixed point).
//! 2. **Endpoint indexing**: Build a dynamic nearest-neighbor index over
//!    segment endpoints, merging coordinates within tolerance into shared
//!    points that track every incident segment.
//! 3. **Sequencing**: Greedily walk the index from the pen's current
//!    position, always drawing the longest stroke incident to the nearest
//!    live point, lifting the pen only when the next stroke does not
//!    continue from the current position.
//!
//! The result is an ordered list of draw steps with explicit pen-lift
//! events. This is a greedy heuristic, not an optimal route solver: pen
//! lifts are expected and counted as cost, not eliminated.

pub mod config;
pub mod consolidate;
pub mod plan;
pub mod result;
pub mod sequence;
pub mod spatial;

pub use config::ToolpathConfig;
pub use consolidate::consolidate;
pub use plan::plan_toolpath;
pub use result::{DrawStep, ToolpathResult};
pub use sequence::sequence;
pub use spatial::PointIndex;
