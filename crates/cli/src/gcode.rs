//! G-code emission.
//!
//! The output format is contractually fixed: a `G21` units header, one
//! pen-lift group (raise, pause, rapid reposition, lower, pause) per
//! lifted draw step, one `G01` linear motion per drawn stroke, and a
//! final pen-up plus return-to-origin. Coordinates pass through the
//! output [`Transformer`] first; the planner itself works in source
//! space.

use std::fmt::Write;

use penpath_core::transform::Transformer;
use penpath_toolpath::DrawStep;

const PEN_UP: &str = "M3 S100; pen up";
const PEN_DOWN: &str = "M3 S0; pen down";
const PAUSE: &str = "G4 P0.5; pause";

/// Renders an ordered toolpath as a G-code program.
pub fn write_gcode(steps: &[DrawStep], transformer: &Transformer) -> String {
    let mut out = String::new();

    writeln!(out, "G21 ; all units in mm").expect("writing to String cannot fail");

    for step in steps {
        if step.lift {
            let target = transformer.apply(step.start);
            writeln!(out, "{PEN_UP}").expect("writing to String cannot fail");
            writeln!(out, "{PAUSE}").expect("writing to String cannot fail");
            writeln!(out, "G00 X{:0.5} Y{:0.5}", target.x, target.y)
                .expect("writing to String cannot fail");
            writeln!(out, "{PEN_DOWN}").expect("writing to String cannot fail");
            writeln!(out, "{PAUSE}").expect("writing to String cannot fail");
        }
        let target = transformer.apply(step.end);
        writeln!(out, "G01 X{:0.5} Y{:0.5}", target.x, target.y)
            .expect("writing to String cannot fail");
    }

    writeln!(out, "{PEN_UP}").expect("writing to String cannot fail");
    writeln!(out, "{PAUSE}").expect("writing to String cannot fail");
    writeln!(out, "G00 X0 Y0; home").expect("writing to String cannot fail");
    out
}
