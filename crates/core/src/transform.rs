//! Coordinate extents and the output transform.
//!
//! The planner works purely in source coordinate space; only the machine
//! output shell runs emitted points through a [`Transformer`] (uniform
//! scale-to-fit followed by a fixed offset).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Point, Segment};

/// Running axis-aligned bounding box over source geometry.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extents {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extents {
    /// Creates an empty extents box that any real point will expand.
    pub fn new() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Computes extents over a set of segment endpoints.
    pub fn of_segments(segments: &[Segment]) -> Self {
        let mut extents = Self::new();
        for seg in segments {
            extents.expand(seg.p0());
            extents.expand(seg.p1());
        }
        extents
    }

    /// Expands the box to include a point.
    pub fn expand(&mut self, pt: Point) {
        self.min_x = self.min_x.min(pt.x);
        self.min_y = self.min_y.min(pt.y);
        self.max_x = self.max_x.max(pt.x);
        self.max_y = self.max_y.max(pt.y);
    }

    /// Width of the box (zero for an empty or single-point box).
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    /// Height of the box (zero for an empty or single-point box).
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    /// True if no points have been added yet.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x
    }
}

impl Default for Extents {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale-to-fit plus offset transform for emitted machine coordinates.
///
/// The scale is uniform — `min(fit_w / width, fit_h / height)` — so the
/// drawing fits fully inside the requested bounds without distortion.
/// Without a fit request the scale is 1.0. The source minimum corner maps
/// to the offset (origin when no offset is given).
#[derive(Debug, Clone, Copy)]
pub struct Transformer {
    origin: (f64, f64),
    scale: f64,
    offset: (f64, f64),
}

impl Transformer {
    /// Builds a transform for geometry spanning `extents`.
    ///
    /// Returns [`Error::InvalidFit`] if `fit` has a non-positive
    /// dimension. Degenerate extents (a single point or a purely
    /// horizontal/vertical drawing) fall back to the defined dimension,
    /// or to scale 1.0 when both collapse.
    pub fn new(
        extents: Extents,
        fit: Option<(f64, f64)>,
        offset: Option<(f64, f64)>,
    ) -> Result<Self> {
        let scale = match fit {
            Some((fit_w, fit_h)) => {
                if fit_w <= 0.0 || fit_h <= 0.0 {
                    return Err(Error::InvalidFit {
                        width: fit_w,
                        height: fit_h,
                    });
                }
                let rx = (extents.width() > 0.0).then(|| fit_w / extents.width());
                let ry = (extents.height() > 0.0).then(|| fit_h / extents.height());
                match (rx, ry) {
                    (Some(rx), Some(ry)) => rx.min(ry),
                    (Some(rx), None) => rx,
                    (None, Some(ry)) => ry,
                    (None, None) => 1.0,
                }
            }
            None => 1.0,
        };

        Ok(Self {
            origin: (extents.min_x, extents.min_y),
            scale,
            offset: offset.unwrap_or((0.0, 0.0)),
        })
    }

    /// Identity transform (no fit, no offset).
    pub fn identity() -> Self {
        Self {
            origin: (0.0, 0.0),
            scale: 1.0,
            offset: (0.0, 0.0),
        }
    }

    /// Maps a source-space point to machine space.
    pub fn apply(&self, pt: Point) -> Point {
        Point::new(
            self.offset.0 + self.scale * (pt.x - self.origin.0),
            self.offset.1 + self.scale * (pt.y - self.origin.1),
        )
    }

    /// The uniform scale factor in use.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
