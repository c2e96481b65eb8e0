//! # Penpath Core
//!
//! Core types shared between the penpath toolpath planner and its
//! I/O shells.
//!
//! ## Core Components
//!
//! - **Geometry primitives**: [`Point`], [`Segment`] — immutable value
//!   types with canonical left-to-right endpoint ordering and a totally
//!   ordered slope (vertical segments use a sentinel value).
//! - **Transforms**: [`Extents`], [`Transformer`] — bounding-box
//!   accumulation and the scale-to-fit + offset transform applied to
//!   emitted machine coordinates.
//! - **Errors**: [`Error`], [`Result`] — shared error taxonomy.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod transform;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Point, Segment, VERTICAL_SLOPE};
pub use transform::{Extents, Transformer};
