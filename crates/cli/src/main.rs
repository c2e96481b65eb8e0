//! penpath CLI: SVG line art to pen-plotter G-code.

mod gcode;
mod svg;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use penpath_core::geometry::Segment;
use penpath_core::transform::{Extents, Transformer};
use penpath_toolpath::{consolidate, plan_toolpath, ToolpathConfig};

#[derive(Parser)]
#[command(name = "penpath")]
#[command(about = "Plan pen-plotter toolpaths from SVG line art")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a toolpath and emit G-code
    Gcode {
        /// Input SVG file (stdin when omitted)
        input: Option<PathBuf>,

        /// Fit the output into these bounds, e.g. --fit 200,150
        #[arg(long, value_parser = parse_pair)]
        fit: Option<(f64, f64)>,

        /// Translate the output by this offset, e.g. --offset 10,10
        #[arg(long, value_parser = parse_pair)]
        offset: Option<(f64, f64)>,

        /// Print a JSON planning summary to stderr
        #[arg(long)]
        summary: bool,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Consolidate redundant collinear segments and emit the result as SVG
    Consolidate {
        /// Input SVG file (stdin when omitted)
        input: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Re-emit the parsed line segments as SVG paths (parser debug view)
    Paths {
        /// Input SVG file (stdin when omitted)
        input: Option<PathBuf>,
    },
}

/// Planner tuning flags shared by the planning subcommands.
#[derive(Args)]
struct Tuning {
    /// Slope tolerance for collinearity binning
    #[arg(long, default_value = "0.01")]
    slope_tolerance: f64,

    /// Position tolerance for point merging and lift decisions
    #[arg(long, default_value = "0.1")]
    position_tolerance: f64,

    /// Sequence the raw segments without consolidating first
    #[arg(long)]
    no_consolidate: bool,

    /// Drop zero-length segments before planning
    #[arg(long)]
    drop_degenerate: bool,
}

impl Tuning {
    fn to_config(&self) -> ToolpathConfig {
        ToolpathConfig::new()
            .with_slope_tolerance(self.slope_tolerance)
            .with_position_tolerance(self.position_tolerance)
            .with_consolidate(!self.no_consolidate)
            .with_drop_degenerate(self.drop_degenerate)
    }
}

/// Parses an "x,y" pair argument.
fn parse_pair(raw: &str) -> Result<(f64, f64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{raw}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x value: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y value: {e}"))?;
    Ok((x, y))
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<Vec<Segment>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    svg::read_segments(&text)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Gcode {
            input,
            fit,
            offset,
            summary,
            tuning,
        } => {
            let segments = read_input(input.as_ref())?;
            let config = tuning.to_config();
            let result = plan_toolpath(&segments, &config)?;

            // The transform maps source extents of the raw input, so
            // consolidation never shifts the output placement.
            let extents = Extents::of_segments(&segments);
            let transformer = Transformer::new(extents, fit, offset)?;
            print!("{}", gcode::write_gcode(&result.steps, &transformer));

            if summary {
                let stats = serde_json::json!({
                    "segments_in": result.segments_in,
                    "segments_drawn": result.segments_drawn,
                    "total_draw_distance": result.total_draw_distance,
                    "total_travel_distance": result.total_travel_distance,
                    "total_lifts": result.total_lifts,
                    "efficiency": result.efficiency(),
                    "computation_time_ms": result.computation_time_ms,
                });
                eprintln!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }

        Commands::Consolidate { input, tuning } => {
            let segments = read_input(input.as_ref())?;
            let config = tuning.to_config();
            let consolidated = consolidate(&segments, &config);
            log::info!(
                "{} segments in, {} out",
                segments.len(),
                consolidated.len()
            );
            print!("{}", svg::write_lines_svg(&consolidated));
        }

        Commands::Paths { input } => {
            let segments = read_input(input.as_ref())?;
            print!("{}", svg::write_paths_svg(&segments));
        }
    }

    Ok(())
}
