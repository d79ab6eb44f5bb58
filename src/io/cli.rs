//! Command-line interface for tracing built-in or PNG wall layouts

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::algorithm::tracer::{GridRayTracer, TraceReport};
use crate::io::configuration::{
    DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_WALL_DENSITY, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
    RANDOM_LAYOUT_RADIUS, TILE_PIXEL_SIZE, VIEW_MARGIN,
};
use crate::io::error::{Result, invalid_argument};
use crate::io::image::{View, export_png, render_layout};
use crate::io::progress::ProgressManager;
use crate::io::visualization::TraceAnimation;
use crate::io::walls::{LayoutOrigin, load_walls_from_png};
use crate::math::point::Point;
use crate::spatial::grid::BoundingBox;
use crate::spatial::layout::{Layout, demo_layout, random_layout};

#[derive(Parser, Debug)]
#[command(name = "tileray")]
#[command(
    author,
    version,
    about = "Trace a ray across a tile grid and render the visited tiles"
)]
/// Command-line arguments for the tracing tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Layout PNG file or directory of layouts (built-in demo layout if omitted)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Ray start point in tile units, as `x,y`
    #[arg(short, long, allow_hyphen_values = true, value_name = "X,Y")]
    pub start: Option<Point>,

    /// Ray end point in tile units, as `x,y`
    #[arg(short, long, allow_hyphen_values = true, value_name = "X,Y")]
    pub end: Option<Point>,

    /// Pixel of the layout image that maps to tile (0, 0) (image centre if omitted)
    #[arg(long, allow_hyphen_values = true, value_name = "X,Y", value_parser = parse_pixel)]
    pub origin: Option<[i32; 2]>,

    /// Scatter random walls instead of using the demo layout
    #[arg(short, long)]
    pub random: bool,

    /// Random seed for reproducible layouts
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Probability that a tile becomes a wall in random layouts
    #[arg(short, long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub density: f64,

    /// Output PNG path for built-in layouts
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also export the trace as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Edge length of one tile in pixels
    #[arg(short, long, default_value_t = TILE_PIXEL_SIZE)]
    pub tile_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Process layouts even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log level implied by the verbosity flags
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    fn layout_origin(&self) -> LayoutOrigin {
        self.origin.map_or(LayoutOrigin::Centered, LayoutOrigin::Pixel)
    }
}

fn parse_pixel(s: &str) -> std::result::Result<[i32; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
    let parse = |part: &str| part.trim().parse::<i32>().map_err(|e| e.to_string());
    Ok([parse(x)?, parse(y)?])
}

/// Traces one layout per input and writes the rendered results
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process layouts according to CLI arguments
    ///
    /// Returns the report of every trace performed.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, layout loading, tracing or
    /// export fails
    pub fn process(&mut self) -> Result<Vec<TraceReport>> {
        let Some(target) = self.cli.target.clone() else {
            let layout = self.builtin_layout()?;
            let output = self
                .cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
            let report = self.trace_layout(layout, &output)?;
            return Ok(vec![report]);
        };

        let files = self.collect_files(&target)?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            let report = self.process_file(file)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file(report.outcome);
            }
            reports.push(report);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn endpoints(&self) -> (Point, Point) {
        let demo = demo_layout();
        (
            self.cli.start.unwrap_or(demo.start),
            self.cli.end.unwrap_or(demo.end),
        )
    }

    fn builtin_layout(&self) -> Result<Layout> {
        let (start, end) = self.endpoints();
        if self.cli.random {
            let radius = RANDOM_LAYOUT_RADIUS;
            let bounds = BoundingBox::new([-radius, -radius], [radius, radius]);
            random_layout(self.cli.seed, self.cli.density, &bounds, start, end)
        } else {
            Ok(Layout {
                start,
                end,
                ..demo_layout()
            })
        }
    }

    fn collect_files(&self, target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if is_png(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.to_path_buf()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_argument(
                    "target",
                    &target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if is_png(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_argument(
                "target",
                &target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            tracing::info!(path = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<TraceReport> {
        let grid = load_walls_from_png(input_path, self.cli.layout_origin())?;
        let (start, end) = self.endpoints();
        let layout = Layout { grid, start, end };
        self.trace_layout(layout, &Self::get_output_path(input_path))
    }

    fn trace_layout(&self, mut layout: Layout, output_path: &Path) -> Result<TraceReport> {
        let report = GridRayTracer::trace(&mut layout.grid, layout.start, layout.end)?;

        tracing::info!(
            start = %layout.start,
            end = %layout.end,
            outcome = ?report.outcome,
            tiles = report.visited.len(),
            hit = ?report.hit(),
            "traced layout"
        );

        let view = View::new(layout.view_bounds()?.expanded(VIEW_MARGIN), self.cli.tile_size)?;
        export_png(&render_layout(&layout, &view), output_path)?;

        if self.cli.visualize {
            let animation = TraceAnimation::capture(&layout, &report, &view);
            animation.export_gif(&output_path.with_extension("gif"), GIF_FRAME_DELAY_MS)?;
        }

        Ok(report)
    }

    /// Output path for a layout file: `<stem>_trace.png` beside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
