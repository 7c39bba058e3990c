//! Block building: merging classified lines into logical text blocks.
//!
//! The builder walks the classified line sequence in reading order and
//! accumulates runs of paragraph lines into paragraph blocks. Heading
//! lines always stand alone: they flush the pending run and are emitted
//! as single-line blocks of their own level.
//!
//! Two consecutive paragraph lines continue the same block only when
//! their left edges align within the indent tolerance and the vertical
//! gap between them stays within the merge-gap budget, both measured
//! relative to the page (width, median line height).

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::layout::line::{ClassifiedLine, LineLevel};

/// A logical text block: a heading line or a merged paragraph run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Structural level of the block
    #[serde(rename = "type")]
    pub level: LineLevel,
    /// Final merged text
    pub text: String,
}

/// Merge classified lines into an ordered sequence of blocks.
///
/// Total over well-formed classified input; degenerate lines with empty
/// text are preserved as empty-string contributions.
///
/// # Arguments
///
/// * `lines` - Classified lines, in the order produced by the classifier
/// * `median_height` - The page's median line height from classification
/// * `page_width` - Page width in pixels
/// * `config` - Merge thresholds and text-joining toggles
///
/// # Examples
///
/// ```
/// use ocr_layout::config::LayoutConfig;
/// use ocr_layout::geometry::Quad;
/// use ocr_layout::layout::{Line, build_blocks, classify_lines};
///
/// let lines = vec![
///     Line::new(Quad::axis_aligned(50.0, 0.0, 700.0, 10.0), "First line of a", 0.9),
///     Line::new(Quad::axis_aligned(50.0, 14.0, 680.0, 10.0), "paragraph.", 0.9),
/// ];
/// let config = LayoutConfig::default();
/// let (classified, median) = classify_lines(&lines, 1000.0, &config);
///
/// let blocks = build_blocks(&classified, median, 1000.0, &config);
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].text, "First line of a paragraph.");
/// ```
pub fn build_blocks(
    lines: &[ClassifiedLine],
    median_height: f32,
    page_width: f32,
    config: &LayoutConfig,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending: Vec<&ClassifiedLine> = Vec::new();
    let mut prev_bottom = 0.0_f32;
    let mut prev_left = 0.0_f32;

    for line in lines {
        let left = line.bbox().left();
        let top = line.bbox().top();

        if line.level.is_heading() {
            flush_pending(&mut blocks, &mut pending, config);
            blocks.push(Block {
                level: line.level,
                text: line.text().to_string(),
            });
        } else if pending.is_empty() {
            pending.push(line);
        } else {
            let gap = top - prev_bottom;
            let aligned = (left - prev_left).abs() <= config.indent_tolerance * page_width;
            if aligned && gap <= config.paragraph_merge_gap * median_height {
                pending.push(line);
            } else {
                flush_pending(&mut blocks, &mut pending, config);
                pending.push(line);
            }
        }

        prev_bottom = line.bbox().bottom();
        prev_left = left;
    }

    flush_pending(&mut blocks, &mut pending, config);
    blocks
}

/// Emit the pending paragraph run as a block, if any.
fn flush_pending(blocks: &mut Vec<Block>, pending: &mut Vec<&ClassifiedLine>, config: &LayoutConfig) {
    if pending.is_empty() {
        return;
    }
    blocks.push(Block {
        level: LineLevel::Paragraph,
        text: merge_paragraph(pending, config),
    });
    pending.clear();
}

/// Concatenate a paragraph run's line texts into one string.
///
/// When hyphen merge is enabled, a fragment ending in a literal `-`
/// followed by a line starting with a lowercase letter is joined by
/// removing the hyphen (a word broken across the line break). All other
/// lines join with the configured separator.
fn merge_paragraph(lines: &[&ClassifiedLine], config: &LayoutConfig) -> String {
    let mut fragments: Vec<String> = Vec::new();

    for line in lines {
        let text = line.text();
        let continues_word = config.hyphen_merge
            && fragments.last().is_some_and(|f| f.ends_with('-'))
            && text.chars().next().is_some_and(char::is_lowercase);

        if continues_word {
            if let Some(last) = fragments.last_mut() {
                last.pop();
                last.push_str(text);
            }
        } else {
            fragments.push(text.to_string());
        }
    }

    let separator = if config.keep_line_breaks { "\n" } else { " " };
    fragments.join(separator)
}
