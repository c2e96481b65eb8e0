//! Full planning pipeline and public entry point.
//!
//! Combines consolidation and sequencing into a complete toolpath with
//! accumulated travel statistics.

use std::time::Instant;

use penpath_core::error::Result;
use penpath_core::geometry::Segment;

use crate::config::ToolpathConfig;
use crate::consolidate::consolidate;
use crate::result::ToolpathResult;
use crate::sequence::sequence;

/// Plans a complete toolpath for a set of raw segments.
///
/// Steps:
/// 1. Optionally drop zero-length segments (`config.drop_degenerate`)
/// 2. Consolidate redundant collinear segments (`config.consolidate`)
/// 3. Sequence the surviving segments with explicit pen lifts
/// 4. Accumulate drawing/travel totals
///
/// Consolidation and sequencing are independent passes; disabling
/// consolidation sequences the raw input as-is.
///
/// # Errors
///
/// Returns [`penpath_core::Error::EmptyInput`] when no segments remain by
/// the time sequencing starts.
pub fn plan_toolpath(segments: &[Segment], config: &ToolpathConfig) -> Result<ToolpathResult> {
    let start = Instant::now();

    let mut input = segments.to_vec();
    if config.drop_degenerate {
        input.retain(|seg| !seg.is_degenerate());
    }
    let segments_in = input.len();

    let strokes = if config.consolidate {
        consolidate(&input, config)
    } else {
        input
    };

    let steps = sequence(&strokes, config)?;

    let mut result = ToolpathResult::new();
    result.segments_in = segments_in;
    result.segments_drawn = steps.len();
    for step in &steps {
        result.total_draw_distance += step.draw_distance;
        result.total_travel_distance += step.travel_distance;
        if step.lift {
            result.total_lifts += 1;
        }
    }
    result.steps = steps;
    result.computation_time_ms = start.elapsed().as_millis() as u64;

    log::debug!(
        "planned {} strokes from {} segments: draw {:.2}, travel {:.2}, {} lifts",
        result.segments_drawn,
        result.segments_in,
        result.total_draw_distance,
        result.total_travel_distance,
        result.total_lifts
    );
    Ok(result)
}
