//! SVG `<line>` reading and writing.
//!
//! The input contract is a sequence of `<line>` primitives with numeric
//! coordinate attributes; unit suffixes (`px`, `mm`, ...) are stripped
//! before parsing. A line with a missing or unparseable coordinate is
//! skipped with a warning rather than failing the run.
//!
//! The writers are pure string builders with no I/O — they return a
//! `String`.

use std::fmt::Write;

use penpath_core::geometry::Segment;
use penpath_core::transform::Extents;

/// Parses every `<line>` element out of an SVG document.
///
/// Malformed lines are skipped and logged; an empty or line-free document
/// yields an empty vec (the planner decides whether that is fatal).
pub fn read_segments(svg: &str) -> anyhow::Result<Vec<Segment>> {
    let doc = roxmltree::Document::parse(svg)?;
    let mut segments = Vec::new();

    for node in doc.descendants().filter(|n| n.has_tag_name("line")) {
        let coords = [
            coord(&node, "x1"),
            coord(&node, "y1"),
            coord(&node, "x2"),
            coord(&node, "y2"),
        ];
        match coords {
            [Some(x1), Some(y1), Some(x2), Some(y2)] => {
                segments.push(Segment::from_coords(x1, y1, x2, y2));
            }
            _ => {
                log::warn!("skipping <line> with missing or malformed coordinates");
            }
        }
    }

    log::debug!("read {} line segments", segments.len());
    Ok(segments)
}

/// Reads one coordinate attribute, stripping any trailing unit suffix.
fn coord(node: &roxmltree::Node, attr: &str) -> Option<f64> {
    let raw = node.attribute(attr)?;
    raw.trim().trim_end_matches(char::is_alphabetic).parse().ok()
}

/// Renders segments back out as an SVG of `<line>` elements
/// (the consolidated-geometry debug view).
pub fn write_lines_svg(segments: &[Segment]) -> String {
    let mut out = svg_header(segments);
    for seg in segments {
        writeln!(
            out,
            r##"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#0000ff" stroke-width="1" />"##,
            seg.p0().x,
            seg.p0().y,
            seg.p1().x,
            seg.p1().y
        )
        .expect("writing to String cannot fail");
    }
    out.push_str("</svg>\n");
    out
}

/// Renders segments as an SVG of `<path>` elements (what was parsed,
/// shown as strokes).
pub fn write_paths_svg(segments: &[Segment]) -> String {
    let mut out = svg_header(segments);
    for seg in segments {
        writeln!(
            out,
            r##"  <path d="M {} {} L {} {}" stroke="#000000" stroke-width="1" fill="none" />"##,
            seg.p0().x,
            seg.p0().y,
            seg.p1().x,
            seg.p1().y
        )
        .expect("writing to String cannot fail");
    }
    out.push_str("</svg>\n");
    out
}

/// Opening `<svg>` tag with a viewBox covering the segment extents.
fn svg_header(segments: &[Segment]) -> String {
    let extents = Extents::of_segments(segments);
    let (min_x, min_y, w, h) = if extents.is_empty() {
        (0.0, 0.0, 1.0, 1.0)
    } else {
        (
            extents.min_x,
            extents.min_y,
            extents.width().max(1.0),
            extents.height().max(1.0),
        )
    };
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        min_x, min_y, w, h
    )
}
