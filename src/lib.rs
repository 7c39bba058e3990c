//! # ocr_layout
//!
//! Logical page-structure reconstruction for OCR output.
//!
//! OCR engines return flat line lists: a quadrilateral bounding box, a
//! text string, and a confidence score per recognized line. This crate
//! reconstructs the page's logical structure from that geometry alone:
//! which lines are headings (H1/H2) versus body text, and how consecutive
//! body lines merge into paragraph blocks.
//!
//! ## Pipeline
//!
//! ```text
//! Line[] (detection order)
//!     ↓
//! [LineOrderStrategy] (column clustering or positional sort)
//!     ↓
//! [classify_lines] (heading levels from height vs. median, shape, position)
//!     ↓
//! [build_blocks] (paragraph merging with hyphenation-aware text joining)
//!     ↓
//! Block[] + PageStats
//! ```
//!
//! Both stages are pure, synchronous transformations over one page's
//! data. Pages are independent; batches are embarrassingly parallel.
//!
//! ## Quick Start
//!
//! ```
//! use ocr_layout::{LayoutConfig, Line, analyze_page};
//! use ocr_layout::geometry::Quad;
//!
//! # fn main() -> ocr_layout::Result<()> {
//! let lines = vec![
//!     Line::new(Quad::axis_aligned(280.0, 30.0, 440.0, 26.0), "Jahresbericht", 0.97),
//!     Line::new(Quad::axis_aligned(70.0, 90.0, 820.0, 11.0), "Das Geschäftsjahr begann mit einer Über-", 0.91),
//!     Line::new(Quad::axis_aligned(70.0, 106.0, 810.0, 11.0), "raschung für alle Beteiligten.", 0.90),
//! ];
//!
//! let analysis = analyze_page(lines, 1000.0, &LayoutConfig::default())?;
//! assert_eq!(analysis.blocks[0].text, "Jahresbericht");
//! assert_eq!(
//!     analysis.blocks[1].text,
//!     "Das Geschäftsjahr begann mit einer Überraschung für alle Beteiligten."
//! );
//! # Ok(())
//! # }
//! ```
//!
//! What this crate does **not** do: run OCR, rasterize PDFs, lay out or
//! render output documents, or manage UI state. It consumes a page's line
//! list plus page pixel width and produces a classified, merged block
//! sequence for downstream serializers.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometric primitives
pub mod geometry;

// Structure analysis
pub mod layout;

// Line ordering strategies
pub mod order;

// Per-page entry points
pub mod page;

// Block text post-processing
pub mod text;

// Re-exports
pub use config::{HeadingRules, LayoutConfig};
pub use error::{Error, Result};
pub use layout::{Block, ClassifiedLine, Line, LineLevel, PageStats, build_blocks, classify_lines};
pub use page::{PageAnalysis, analyze_page, analyze_pages};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "ocr_layout");
    }
}
