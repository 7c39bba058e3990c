//! Page-structure analysis for recognized text lines.
//!
//! This module reconstructs the logical structure of one OCR'd page:
//! - Line classification into heading levels (H1, H2) and body text
//! - Block building: merging adjacent paragraph lines into blocks
//! - Per-page diagnostic statistics
//!
//! The two stages run in sequence: [`classify_lines`] produces the page's
//! median line height and per-line levels, and [`build_blocks`] consumes
//! that output to produce the final ordered block list. No state persists
//! across pages.

pub mod block_builder;
pub mod classifier;
pub mod line;
pub mod statistics;

// Re-export main types
pub use block_builder::{Block, build_blocks};
pub use classifier::classify_lines;
pub use line::{ClassifiedLine, Line, LineLevel};
pub use statistics::PageStats;
