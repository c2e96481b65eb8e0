//! Dynamic nearest-neighbor index over segment endpoints.
//!
//! The sequencer repeatedly asks "which drawable point is closest to the
//! pen right now?" while segments are consumed. This module answers that
//! with an R*-tree over live points, each carrying a mutable membership
//! list of incident segment indices.
//!
//! Points live in an arena; the tree stores only `(position, slot)`
//! entries. Mutating a point's membership never touches the tree, and
//! removing a point retires its arena slot, so queries can never observe
//! a dangling reference.

use penpath_core::geometry::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A live point entry in the R*-tree, referencing an arena slot.
#[derive(Debug, Clone, Copy, PartialEq)]
struct IndexedPoint {
    position: [f64; 2],
    slot: usize,
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Arena record for one spatial point.
#[derive(Debug, Clone)]
struct PointSlot {
    position: Point,
    /// Indices of every segment with an endpoint at this point. A
    /// degenerate segment contributes its index twice to one slot, so
    /// this is a list rather than a set.
    segments: Vec<usize>,
    retired: bool,
}

/// Dynamic 2D nearest-neighbor index with per-point segment membership.
///
/// Endpoint coordinates within `position_tolerance` of an existing live
/// point merge into it (a vertex where several strokes meet becomes one
/// point); otherwise a fresh point is created. A point is erased from the
/// index the instant its membership becomes empty.
#[derive(Debug)]
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
    arena: Vec<PointSlot>,
    position_tolerance: f64,
    live: usize,
}

impl PointIndex {
    /// Creates an empty index with the given coordinate-merge tolerance.
    pub fn new(position_tolerance: f64) -> Self {
        Self {
            tree: RTree::new(),
            arena: Vec::new(),
            position_tolerance,
            live: 0,
        }
    }

    /// Ingests one endpoint of segment `segment`.
    ///
    /// Merges into the nearest live point within tolerance, or inserts a
    /// new point. Returns the arena slot the endpoint landed in.
    pub fn insert_endpoint(&mut self, segment: usize, pt: Point) -> usize {
        if let Some(slot) = self.nearest(pt) {
            if self.arena[slot].position.distance(pt) <= self.position_tolerance {
                self.arena[slot].segments.push(segment);
                return slot;
            }
        }

        let slot = self.arena.len();
        self.arena.push(PointSlot {
            position: pt,
            segments: vec![segment],
            retired: false,
        });
        self.tree.insert(IndexedPoint {
            position: [pt.x, pt.y],
            slot,
        });
        self.live += 1;
        slot
    }

    /// Finds the live point nearest to `query`.
    ///
    /// Tie-break rule: among points at exactly the minimal squared
    /// distance, the lexicographically smallest `(x, y)` coordinate wins.
    /// This keeps stroke order reproducible when several points are
    /// equidistant from the pen.
    pub fn nearest(&self, query: Point) -> Option<usize> {
        let q = [query.x, query.y];
        let mut iter = self.tree.nearest_neighbor_iter_with_distance_2(&q);
        let (first, best_d2) = iter.next()?;
        let mut best = first;
        for (candidate, d2) in iter {
            if d2 > best_d2 {
                break;
            }
            if (candidate.position[0], candidate.position[1])
                < (best.position[0], best.position[1])
            {
                best = candidate;
            }
        }
        Some(best.slot)
    }

    /// Coordinate of a live point.
    pub fn position(&self, slot: usize) -> Point {
        self.arena[slot].position
    }

    /// Membership list of a live point (indices of undrawn incident
    /// segments).
    pub fn segments(&self, slot: usize) -> &[usize] {
        &self.arena[slot].segments
    }

    /// True if the slot still holds a live point.
    pub fn is_live(&self, slot: usize) -> bool {
        !self.arena[slot].retired
    }

    /// Removes one occurrence of `segment` from a point's membership.
    ///
    /// If the membership becomes empty the point is erased from the tree
    /// and its slot retired; subsequent queries never return it.
    pub fn remove_membership(&mut self, slot: usize, segment: usize) {
        let entry = &mut self.arena[slot];
        if let Some(pos) = entry.segments.iter().position(|&s| s == segment) {
            entry.segments.remove(pos);
        }
        if entry.segments.is_empty() && !entry.retired {
            entry.retired = true;
            self.tree.remove(&IndexedPoint {
                position: [entry.position.x, entry.position.y],
                slot,
            });
            self.live -= 1;
        }
    }

    /// Number of live points.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True if no live points remain.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Sum of membership entries across all live points. Equals twice
    /// the number of undrawn segments at all times during sequencing.
    pub fn total_membership(&self) -> usize {
        self.arena
            .iter()
            .filter(|slot| !slot.retired)
            .map(|slot| slot.segments.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let index = PointIndex::new(0.1);
        assert!(index.is_empty());
        assert_eq!(index.nearest(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_insert_and_nearest() {
        let mut index = PointIndex::new(0.1);
        let a = index.insert_endpoint(0, Point::new(0.0, 0.0));
        let b = index.insert_endpoint(1, Point::new(10.0, 0.0));
        assert_ne!(a, b);
        assert_eq!(index.len(), 2);

        assert_eq!(index.nearest(Point::new(1.0, 0.0)), Some(a));
        assert_eq!(index.nearest(Point::new(9.0, 0.0)), Some(b));
    }

    #[test]
    fn test_coordinate_merge_within_tolerance() {
        let mut index = PointIndex::new(0.1);
        let a = index.insert_endpoint(0, Point::new(5.0, 5.0));
        let b = index.insert_endpoint(1, Point::new(5.05, 5.0));
        assert_eq!(a, b);
        assert_eq!(index.len(), 1);
        assert_eq!(index.segments(a), &[0, 1]);
    }

    #[test]
    fn test_no_merge_beyond_tolerance() {
        let mut index = PointIndex::new(0.1);
        let a = index.insert_endpoint(0, Point::new(5.0, 5.0));
        let b = index.insert_endpoint(1, Point::new(5.2, 5.0));
        assert_ne!(a, b);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_degenerate_segment_double_membership() {
        let mut index = PointIndex::new(0.1);
        let a = index.insert_endpoint(0, Point::new(1.0, 1.0));
        let b = index.insert_endpoint(0, Point::new(1.0, 1.0));
        assert_eq!(a, b);
        assert_eq!(index.segments(a), &[0, 0]);
        assert_eq!(index.total_membership(), 2);
    }

    #[test]
    fn test_removal_retires_empty_point() {
        let mut index = PointIndex::new(0.1);
        let a = index.insert_endpoint(0, Point::new(0.0, 0.0));
        let b = index.insert_endpoint(0, Point::new(10.0, 0.0));
        index.insert_endpoint(1, Point::new(10.0, 0.0));

        index.remove_membership(a, 0);
        assert!(!index.is_live(a));
        assert_eq!(index.len(), 1);

        // Erased points never come back from queries.
        assert_eq!(index.nearest(Point::new(0.0, 0.0)), Some(b));

        index.remove_membership(b, 0);
        assert!(index.is_live(b), "slot with remaining membership stays live");
        index.remove_membership(b, 1);
        assert!(index.is_empty());
        assert_eq!(index.nearest(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        let mut index = PointIndex::new(0.01);
        // Two points equidistant from the origin query.
        let _right = index.insert_endpoint(0, Point::new(5.0, 0.0));
        let left = index.insert_endpoint(1, Point::new(-5.0, 0.0));

        // (-5, 0) < (5, 0) lexicographically.
        assert_eq!(index.nearest(Point::new(0.0, 0.0)), Some(left));

        // Same x, differing y: smaller y wins.
        let mut index = PointIndex::new(0.01);
        let _up = index.insert_endpoint(0, Point::new(0.0, 5.0));
        let down = index.insert_endpoint(1, Point::new(0.0, -5.0));
        assert_eq!(index.nearest(Point::new(0.0, 0.0)), Some(down));
    }

    #[test]
    fn test_membership_sum_invariant() {
        let mut index = PointIndex::new(0.1);
        // Three segments sharing a hub vertex.
        index.insert_endpoint(0, Point::new(0.0, 0.0));
        index.insert_endpoint(0, Point::new(10.0, 0.0));
        index.insert_endpoint(1, Point::new(0.0, 0.0));
        index.insert_endpoint(1, Point::new(0.0, 10.0));
        index.insert_endpoint(2, Point::new(0.0, 0.0));
        index.insert_endpoint(2, Point::new(-10.0, 0.0));

        assert_eq!(index.total_membership(), 6);

        // Hub point accumulated all three segments.
        let hub = index.nearest(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(index.segments(hub), &[0, 1, 2]);
    }
}
