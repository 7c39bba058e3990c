//! Per-page diagnostic statistics.
//!
//! Collected alongside the block output for reporting and tuning
//! collaborators (threshold histograms, per-page heading counts). Nothing
//! in the analysis itself consumes these values.

use serde::{Deserialize, Serialize};

use crate::layout::line::{ClassifiedLine, LineLevel};

/// Diagnostic statistics for one analyzed page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageStats {
    /// Median line height used by the heading thresholds
    pub median_height: f32,
    /// Height of every line, in input order
    pub line_heights: Vec<f32>,
    /// Number of lines classified H1
    pub h1_count: usize,
    /// Number of lines classified H2
    pub h2_count: usize,
    /// Arithmetic mean of the lines' recognition confidences
    pub mean_confidence: f32,
}

impl PageStats {
    /// Collect statistics from a page's classified lines.
    ///
    /// An empty page yields all-zero statistics.
    pub fn from_classified(lines: &[ClassifiedLine], median_height: f32) -> Self {
        let line_heights = lines.iter().map(|l| l.height).collect();
        let h1_count = lines.iter().filter(|l| l.level == LineLevel::H1).count();
        let h2_count = lines.iter().filter(|l| l.level == LineLevel::H2).count();
        let mean_confidence = if lines.is_empty() {
            0.0
        } else {
            lines.iter().map(|l| l.line.confidence).sum::<f32>() / lines.len() as f32
        };

        Self {
            median_height,
            line_heights,
            h1_count,
            h2_count,
            mean_confidence,
        }
    }
}
