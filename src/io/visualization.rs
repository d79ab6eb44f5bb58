//! Step-by-step GIF animation of a trace

use image::{Delay, Frame, RgbaImage};
use std::path::Path;

use crate::algorithm::tracer::TraceReport;
use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, TraceError};
use crate::io::image::{View, render_layout};
use crate::spatial::layout::Layout;
use crate::spatial::tiles::TraceMark;

/// Rendered frames of one trace: the bare layout, one frame per visited tile,
/// and the final classification
pub struct TraceAnimation {
    frames: Vec<RgbaImage>,
}

impl TraceAnimation {
    /// Render the progression of `report` over `layout`
    ///
    /// `layout.grid` should be the grid the report was traced on; its trace
    /// annotations provide the final frame.
    pub fn capture(layout: &Layout, report: &TraceReport, view: &View) -> Self {
        let mut scratch = layout.clone();
        scratch.grid.reset_trace();

        let mut frames = Vec::with_capacity(report.visited.len() + 2);
        frames.push(render_layout(&scratch, view));

        for &cell in &report.visited {
            scratch.grid.mark(cell, TraceMark::Collide);
            frames.push(render_layout(&scratch, view));
        }

        frames.push(render_layout(layout, view));

        Self { frames }
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Captured frames in playback order
    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    /// Export the frames as a GIF, dropping frames faster than viewers can show
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;

        let last = self.frames.len().saturating_sub(1);
        let frames = self
            .frames
            .iter()
            .enumerate()
            .filter(|(i, _)| i % skip_factor == 0 || *i == last)
            .map(|(i, img)| {
                let delay = if i == last {
                    effective_delay_ms * FINAL_FRAME_HOLD
                } else {
                    effective_delay_ms
                };
                Frame::from_parts(img.clone(), 0, 0, Delay::from_numer_denom_ms(delay, 1))
            });

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TraceError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        let file = std::fs::File::create(output_path).map_err(|e| TraceError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| TraceError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}
