//! Segment consolidation.
//!
//! Upstream vector rendering tends to emit the same stroke as many
//! redundant, touching, or overlapping collinear fragments. This pass
//! collapses each such family into a single segment covering the same
//! geometry, so the sequencer never draws the same ink twice.
//!
//! # Algorithm
//!
//! 1. Sort segments by slope and bin them into working sets: a set grows
//!    while each successive slope stays within `slope_tolerance` of the
//!    set's reference slope (the first slope in the bin).
//! 2. Reduce each working set to fixed point: scan pairs left-to-right,
//!    merge the first genuinely collinear pair whose x-ranges touch or
//!    overlap into a segment spanning their outermost endpoints, and
//!    restart the pass. A pass with no merge ends the set.
//!
//! Convergence is guaranteed because every merge strictly reduces the
//! set's cardinality. Segments that are parallel but offset — same
//! direction, different line — are rejected by checking the cross-pairing
//! slopes between the two segments' endpoints against the left segment's
//! slope.

use penpath_core::geometry::{slope_between, Point, Segment};

use crate::config::ToolpathConfig;

/// Collapses redundant collinear segments into minimal covering form.
///
/// The output covers exactly the same drawn geometry with count <= the
/// input count. Collinear segments separated by a genuine positional gap
/// are preserved distinct. Running `consolidate` on its own output is a
/// no-op.
pub fn consolidate(segments: &[Segment], config: &ToolpathConfig) -> Vec<Segment> {
    if segments.len() < 2 {
        return segments.to_vec();
    }

    let mut sorted = segments.to_vec();
    sorted.sort_by(|a, b| a.slope().total_cmp(&b.slope()));

    let mut output = Vec::with_capacity(sorted.len());
    let mut working_set: Vec<Segment> = Vec::new();
    let mut reference_slope = sorted[0].slope();

    for seg in sorted {
        // Bin by slope against the set's reference. The sentinel slope of
        // vertical segments differs from itself by exactly zero, so all
        // verticals land in one bin.
        if (seg.slope() - reference_slope).abs() < config.slope_tolerance {
            working_set.push(seg);
        } else {
            // Slope discontinuity: reduce the accumulated set, then open
            // a new one with this slope as reference.
            reduce_set(&mut working_set, config.slope_tolerance);
            output.append(&mut working_set);
            reference_slope = seg.slope();
            working_set.push(seg);
        }
    }
    reduce_set(&mut working_set, config.slope_tolerance);
    output.append(&mut working_set);

    log::debug!(
        "consolidated {} segments into {}",
        segments.len(),
        output.len()
    );
    output
}

/// Reduces one same-slope working set to fixed point in place.
fn reduce_set(set: &mut Vec<Segment>, slope_tolerance: f64) {
    loop {
        if set.len() < 2 {
            return;
        }

        // Scan left-to-right by leftmost endpoint.
        set.sort_by(|a, b| a.p0().x.total_cmp(&b.p0().x));

        match find_merge(set, slope_tolerance) {
            Some((i, j, merged)) => {
                // A merge invalidates the remaining pairwise comparisons
                // of this pass; restart over the replaced set.
                set.swap_remove(j);
                set.swap_remove(i);
                set.push(merged);
            }
            None => return,
        }
    }
}

/// Finds the first mergeable pair in a slope-sorted working set.
///
/// Returns the pair's indices (`i < j`) and the replacement segment
/// spanning their outermost endpoints.
fn find_merge(set: &[Segment], slope_tolerance: f64) -> Option<(usize, usize, Segment)> {
    for i in 0..set.len() {
        for j in (i + 1)..set.len() {
            let (a, b) = (set[i], set[j]);
            let expected = a.slope();

            // True collinearity: the slopes of the cross pairings
            // (a.p1 -> b.p0 and a.p0 -> b.p1) must also match. Merely
            // parallel segments on offset lines fail this.
            if !cross_slope_matches(a.p1(), b.p0(), expected, slope_tolerance)
                || !cross_slope_matches(a.p0(), b.p1(), expected, slope_tolerance)
            {
                continue;
            }

            // Strict gap in x-ranges: --- ----- stays two strokes.
            let strict_gap =
                a.p0().x < a.p1().x && a.p1().x < b.p0().x && b.p0().x < b.p1().x;
            if strict_gap {
                continue;
            }

            // Touching or overlapping: span the outermost of the four
            // endpoints. Lexicographic (x, y) order makes coincident-x
            // (vertical) sets span min-y to max-y.
            let mut pts = [a.p0(), a.p1(), b.p0(), b.p1()];
            pts.sort_by(|p, q| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)));
            return Some((i, j, Segment::new(pts[0], pts[3])));
        }
    }
    None
}

/// Slope comparison for a cross pairing. Coincident points (segments that
/// share an endpoint) impose no direction and always match.
fn cross_slope_matches(a: Point, b: Point, expected: f64, slope_tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    (slope_between(a, b) - expected).abs() <= slope_tolerance
}
