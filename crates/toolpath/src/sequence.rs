//! Greedy stroke sequencing.
//!
//! Walks the segment set in an order that keeps pen-up travel short: from
//! the pen's current position, find the nearest live endpoint, draw the
//! longest not-yet-drawn segment incident to it (long strokes first
//! reduces the number of future short hops), and hand the cursor to the
//! stroke's far endpoint so connected line work is drawn continuously.
//!
//! This is a greedy heuristic over a shrinking spatial index, not an
//! optimal route solver. The index strictly shrinks as memberships
//! empty, so the loop runs exactly once per segment.

use penpath_core::error::{Error, Result};
use penpath_core::geometry::{Point, Segment};

use crate::config::ToolpathConfig;
use crate::result::DrawStep;
use crate::spatial::PointIndex;

/// Orders segments for drawing, emitting explicit pen-lift events.
///
/// The pen starts at `config.start_position`. A step carries `lift =
/// true` exactly when the distance from the previous pen position to the
/// stroke's near endpoint exceeds `config.position_tolerance`.
///
/// Returns [`Error::EmptyInput`] for an empty segment set: with no
/// endpoints there is no first reference point to start from.
pub fn sequence(segments: &[Segment], config: &ToolpathConfig) -> Result<Vec<DrawStep>> {
    if segments.is_empty() {
        return Err(Error::EmptyInput);
    }

    // Build the endpoint index, remembering which slot each endpoint
    // landed in so consumption never depends on a second lookup.
    let mut index = PointIndex::new(config.position_tolerance);
    let mut endpoint_slots = Vec::with_capacity(segments.len());
    for (i, seg) in segments.iter().enumerate() {
        let s0 = index.insert_endpoint(i, seg.p0());
        let s1 = index.insert_endpoint(i, seg.p1());
        endpoint_slots.push([s0, s1]);
    }

    let mut pen = Point::new(config.start_position.0, config.start_position.1);
    let mut steps = Vec::with_capacity(segments.len());
    let mut cursor: Option<usize> = None;

    for _ in 0..segments.len() {
        // Without a held cursor, search for the point nearest the pen.
        let Some(slot) = cursor.or_else(|| index.nearest(pen)) else {
            break;
        };

        // Longest undrawn segment through this point; ties go to the
        // lowest segment index so the order stays reproducible.
        let Some(seg_idx) = index
            .segments(slot)
            .iter()
            .copied()
            .max_by(|&a, &b| {
                segments[a]
                    .length()
                    .total_cmp(&segments[b].length())
                    .then_with(|| b.cmp(&a))
            })
        else {
            break;
        };
        let seg = segments[seg_idx];

        // Draw from the endpoint nearer the pen to the other one.
        let [s0, s1] = endpoint_slots[seg_idx];
        let (near, far, near_slot, far_slot) =
            if pen.distance(seg.p0()) <= pen.distance(seg.p1()) {
                (seg.p0(), seg.p1(), s0, s1)
            } else {
                (seg.p1(), seg.p0(), s1, s0)
            };

        let travel = pen.distance(near);
        let lift = travel > config.position_tolerance;
        if lift {
            log::debug!(
                "pen lift: ({:.3}, {:.3}) -> ({:.3}, {:.3})",
                pen.x,
                pen.y,
                near.x,
                near.y
            );
        }

        steps.push(DrawStep {
            lift,
            travel_from: lift.then_some(pen),
            start: near,
            end: far,
            travel_distance: if lift { travel } else { 0.0 },
            draw_distance: seg.length(),
        });
        pen = far;

        // Consume the segment at both endpoints; emptied points drop out
        // of the index immediately.
        index.remove_membership(near_slot, seg_idx);
        index.remove_membership(far_slot, seg_idx);

        // Continue from the far point if it still has drawable segments,
        // otherwise force a fresh nearest-neighbor search next iteration.
        cursor = index.is_live(far_slot).then_some(far_slot);
    }

    debug_assert_eq!(steps.len(), segments.len());
    debug_assert!(index.is_empty());
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::from_coords(x1, y1, x2, y2)
    }

    fn config() -> ToolpathConfig {
        ToolpathConfig::default()
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = sequence(&[], &config());
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_single_segment() {
        let steps = sequence(&[seg(1.0, 1.0, 5.0, 1.0)], &config()).unwrap();
        assert_eq!(steps.len(), 1);
        // Pen starts at origin, away from both endpoints: must lift.
        assert!(steps[0].lift);
        assert_eq!(steps[0].start, Point::new(1.0, 1.0));
        assert_eq!(steps[0].end, Point::new(5.0, 1.0));
    }

    #[test]
    fn test_one_step_per_segment() {
        let segments = vec![
            seg(0.0, 0.0, 10.0, 0.0),
            seg(10.0, 0.0, 10.0, 10.0),
            seg(50.0, 50.0, 60.0, 50.0),
            seg(0.0, 5.0, 3.0, 5.0),
        ];
        let steps = sequence(&segments, &config()).unwrap();
        assert_eq!(steps.len(), segments.len());
    }

    #[test]
    fn test_completeness_endpoint_pairs_preserved() {
        let segments = vec![
            seg(0.0, 0.0, 10.0, 0.0),
            seg(20.0, 3.0, 25.0, 8.0),
            seg(-5.0, -5.0, -1.0, -1.0),
        ];
        let steps = sequence(&segments, &config()).unwrap();

        for segment in &segments {
            let drawn = steps.iter().any(|step| {
                (step.start == segment.p0() && step.end == segment.p1())
                    || (step.start == segment.p1() && step.end == segment.p0())
            });
            assert!(drawn, "segment {:?} missing from output", segment);
        }
    }

    #[test]
    fn test_connected_chain_draws_without_lifts() {
        // An L starting at the origin: no lift should ever be needed
        // after the pen reaches the first endpoint.
        let segments = vec![seg(0.0, 0.0, 10.0, 0.0), seg(10.0, 0.0, 10.0, 10.0)];
        let steps = sequence(&segments, &config()).unwrap();

        assert_eq!(steps.len(), 2);
        // First stroke starts at the pen's origin position: no lift.
        assert!(!steps[0].lift);
        assert_eq!(steps[0].start, Point::new(0.0, 0.0));
        // Second stroke continues from (10, 0).
        assert!(!steps[1].lift);
        assert_eq!(steps[1].start, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_lift_between_disjoint_strokes() {
        let segments = vec![seg(0.0, 0.0, 5.0, 0.0), seg(50.0, 50.0, 55.0, 50.0)];
        let steps = sequence(&segments, &config()).unwrap();

        assert_eq!(steps.len(), 2);
        assert!(steps[1].lift, "disjoint stroke requires a pen lift");
        assert_eq!(steps[1].travel_from, Some(steps[0].end));
        assert!(steps[1].travel_distance > 0.0);
    }

    #[test]
    fn test_lift_iff_beyond_tolerance() {
        // Second stroke starts 0.05 from the first's end: within the 0.1
        // tolerance, so no lift even though the coordinates differ.
        let segments = vec![seg(0.0, 0.0, 5.0, 0.0), seg(5.05, 0.0, 9.0, 0.0)];
        let cfg = ToolpathConfig::new().with_consolidate(false);
        let steps = sequence(&segments, &cfg).unwrap();
        assert!(!steps[1].lift);
        assert_eq!(steps[1].travel_distance, 0.0);
    }

    #[test]
    fn test_longest_segment_preferred_at_shared_point() {
        // Two strokes leave the origin; the longer one is drawn first.
        let segments = vec![seg(0.0, 0.0, 3.0, 0.0), seg(0.0, 0.0, 30.0, 0.0)];
        let steps = sequence(&segments, &config()).unwrap();
        assert_eq!(steps[0].end, Point::new(30.0, 0.0));
    }

    #[test]
    fn test_nearest_stroke_drawn_first() {
        let segments = vec![
            seg(100.0, 0.0, 110.0, 0.0),
            seg(2.0, 0.0, 12.0, 0.0),
            seg(60.0, 0.0, 70.0, 0.0),
        ];
        let steps = sequence(&segments, &config()).unwrap();
        // Pen starts at origin: the stroke starting at x=2 goes first.
        assert_eq!(steps[0].start, Point::new(2.0, 0.0));
    }

    #[test]
    fn test_degenerate_segment_sequences() {
        let segments = vec![seg(5.0, 5.0, 5.0, 5.0), seg(0.0, 0.0, 1.0, 0.0)];
        let steps = sequence(&segments, &config()).unwrap();
        assert_eq!(steps.len(), 2);
        let dot = steps
            .iter()
            .find(|s| s.draw_distance == 0.0)
            .expect("degenerate stroke present");
        assert_eq!(dot.start, dot.end);
    }

    #[test]
    fn test_shared_hub_vertex_terminates() {
        // Star: four strokes meeting at one hub point.
        let segments = vec![
            seg(0.0, 0.0, 10.0, 0.0),
            seg(0.0, 0.0, -10.0, 0.0),
            seg(0.0, 0.0, 0.0, 10.0),
            seg(0.0, 0.0, 0.0, -10.0),
        ];
        let steps = sequence(&segments, &config()).unwrap();
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn test_start_position_respected() {
        let segments = vec![seg(0.0, 0.0, 10.0, 0.0)];
        let cfg = ToolpathConfig::new().with_start_position(10.0, 0.0);
        let steps = sequence(&segments, &cfg).unwrap();
        // Pen already rests on the right endpoint: draw right-to-left,
        // no lift.
        assert!(!steps[0].lift);
        assert_eq!(steps[0].start, Point::new(10.0, 0.0));
        assert_eq!(steps[0].end, Point::new(0.0, 0.0));
    }
}
