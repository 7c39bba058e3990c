//! Per-page analysis entry points.
//!
//! One call runs the full sequence for a page: order the lines, classify
//! them, merge them into blocks, clean the block text, and collect the
//! diagnostics. Pages are independent: no state survives from one page
//! to the next, and a batch may be processed in any order or in parallel
//! by the caller.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::{Block, Line, PageStats, build_blocks, classify_lines};
use crate::order::create_strategy;
use crate::text::TextCleaner;

/// The analyzed structure of one page: blocks plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageAnalysis {
    /// Ordered logical blocks of the page
    pub blocks: Vec<Block>,
    /// Diagnostic statistics collected during analysis
    pub stats: PageStats,
}

/// Analyze one page of recognized lines.
///
/// Validates the configuration, orders the lines into reading order,
/// classifies them against the page's median line height, merges them
/// into blocks, and applies the configured text cleanup.
///
/// # Arguments
///
/// * `lines` - The page's recognized lines in detection order
/// * `page_width` - Page width in pixels
/// * `config` - Analysis configuration
///
/// # Errors
///
/// Fails only on configuration misuse; the analysis itself is total.
/// An empty page yields empty blocks and all-zero statistics.
///
/// # Examples
///
/// ```
/// use ocr_layout::config::LayoutConfig;
/// use ocr_layout::geometry::Quad;
/// use ocr_layout::layout::{Line, LineLevel};
/// use ocr_layout::page::analyze_page;
///
/// let lines = vec![
///     Line::new(Quad::axis_aligned(300.0, 20.0, 400.0, 28.0), "Report", 0.95),
///     Line::new(Quad::axis_aligned(60.0, 80.0, 800.0, 11.0), "First line of the", 0.9),
///     Line::new(Quad::axis_aligned(60.0, 96.0, 790.0, 11.0), "opening paragraph.", 0.9),
/// ];
///
/// let analysis = analyze_page(lines, 1000.0, &LayoutConfig::default())?;
/// assert_eq!(analysis.blocks.len(), 2);
/// assert_eq!(analysis.blocks[0].level, LineLevel::H1);
/// assert_eq!(analysis.blocks[1].text, "First line of the opening paragraph.");
/// # Ok::<(), ocr_layout::Error>(())
/// ```
pub fn analyze_page(
    lines: Vec<Line>,
    page_width: f32,
    config: &LayoutConfig,
) -> Result<PageAnalysis> {
    config.validate()?;
    let cleaner = TextCleaner::from_patterns(&config.cleanup_patterns)?;

    let strategy = create_strategy(config);
    let line_count = lines.len();
    let ordered = strategy.order(lines, page_width);

    let (classified, median_height) = classify_lines(&ordered, page_width, config);
    let mut blocks = build_blocks(&classified, median_height, page_width, config);

    if !cleaner.is_empty() {
        for block in &mut blocks {
            block.text = cleaner.clean(&block.text);
        }
    }

    let stats = PageStats::from_classified(&classified, median_height);
    log::debug!(
        "analyzed page via {}: {} lines -> {} blocks (median height {:.1}, {} h1, {} h2)",
        strategy.name(),
        line_count,
        blocks.len(),
        stats.median_height,
        stats.h1_count,
        stats.h2_count,
    );

    Ok(PageAnalysis { blocks, stats })
}

/// Analyze a batch of pages.
///
/// Each entry pairs a page's lines with its pixel width. Results preserve
/// the input page order. Pages are processed independently; this helper
/// exists for callers that do not need their own scheduling.
pub fn analyze_pages(
    pages: Vec<(Vec<Line>, f32)>,
    config: &LayoutConfig,
) -> Result<Vec<PageAnalysis>> {
    let page_count = pages.len();
    let analyses = pages
        .into_iter()
        .map(|(lines, page_width)| analyze_page(lines, page_width, config))
        .collect::<Result<Vec<_>>>()?;
    log::info!("analyzed {} pages", page_count);
    Ok(analyses)
}
