//! Line classification into heading levels and body text.
//!
//! Scanned pages carry no font metadata, so heading detection works from
//! detection geometry alone: a line's height relative to the page's median
//! line height, its width and position, and the vertical gap above it.
//!
//! The H1 rule is checked before the H2 rule and the first match wins. A
//! configuration where the H2 threshold is at or above the H1 threshold is
//! therefore shadowed rather than rejected here; callers are expected to
//! run [`LayoutConfig::validate`](crate::config::LayoutConfig::validate)
//! beforehand.

use crate::config::LayoutConfig;
use crate::layout::line::{ClassifiedLine, Line, LineLevel};

/// H2 lines must be narrower than this fraction of the page width.
const MAX_HEADING_WIDTH_RATIO: f32 = 0.75;

/// The `centered` rule fires when the line center is within this fraction
/// of the page width from the page center.
const CENTERED_TOLERANCE: f32 = 0.05;

/// The `big_gap` rule fires when the gap above the line exceeds this
/// factor × median line height.
const BIG_GAP_FACTOR: f32 = 0.8;

/// Classify each line of a page as H1, H2, or body text.
///
/// Returns the classified lines in input order together with the page's
/// median line height. Classification is order-dependent only through the
/// running previous-line bottom edge used by the `big_gap` rule, so the
/// input must already be in reading order.
///
/// An empty input yields an empty output and median height 0. A
/// single-line page always classifies as body text for thresholds above
/// 1.0, since the median then equals the line's own height.
///
/// # Arguments
///
/// * `lines` - The page's lines in reading order
/// * `page_width` - Page width in pixels
/// * `config` - Thresholds and rule toggles
///
/// # Examples
///
/// ```
/// use ocr_layout::config::LayoutConfig;
/// use ocr_layout::geometry::Quad;
/// use ocr_layout::layout::{Line, LineLevel, classify_lines};
///
/// let lines = vec![
///     Line::new(Quad::axis_aligned(100.0, 40.0, 400.0, 25.0), "Title", 0.9),
///     Line::new(Quad::axis_aligned(80.0, 100.0, 600.0, 10.0), "Body text", 0.9),
///     Line::new(Quad::axis_aligned(80.0, 115.0, 600.0, 10.0), "More body", 0.9),
/// ];
///
/// let (classified, median) = classify_lines(&lines, 1000.0, &LayoutConfig::default());
/// assert_eq!(median, 10.0);
/// assert_eq!(classified[0].level, LineLevel::H1);
/// assert_eq!(classified[1].level, LineLevel::Paragraph);
/// ```
pub fn classify_lines(
    lines: &[Line],
    page_width: f32,
    config: &LayoutConfig,
) -> (Vec<ClassifiedLine>, f32) {
    if lines.is_empty() {
        return (Vec::new(), 0.0);
    }

    let heights: Vec<f32> = lines.iter().map(|l| l.bbox.height()).collect();
    let median_h = median(&heights);

    let mut classified = Vec::with_capacity(lines.len());
    let mut prev_bottom = 0.0_f32;

    for (line, &height) in lines.iter().zip(&heights) {
        let gap = line.bbox.top() - prev_bottom;
        prev_bottom = line.bbox.bottom();

        let level = classify_line(line, height, gap, median_h, page_width, config);
        classified.push(ClassifiedLine {
            line: line.clone(),
            level,
            height,
        });
    }

    (classified, median_h)
}

/// Apply the heading rules to a single line. First match wins.
fn classify_line(
    line: &Line,
    height: f32,
    gap: f32,
    median_h: f32,
    page_width: f32,
    config: &LayoutConfig,
) -> LineLevel {
    if height > config.h1_threshold * median_h {
        return LineLevel::H1;
    }

    let rules = &config.heading_rules;
    let extra_rule_fires = (rules.centered
        && (line.bbox.center_x() - page_width / 2.0).abs() < CENTERED_TOLERANCE * page_width)
        || (rules.all_caps && is_all_caps(&line.text))
        || (rules.big_gap && gap > BIG_GAP_FACTOR * median_h);

    if height > config.h2_threshold * median_h
        && line.bbox.width() < MAX_HEADING_WIDTH_RATIO * page_width
        && extra_rule_fires
    {
        LineLevel::H2
    } else {
        LineLevel::Paragraph
    }
}

/// Statistical median: for even counts, the mean of the two middle values.
pub(crate) fn median(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// True when the text contains at least one uppercase letter and no
/// lowercase letters. Digits and punctuation are ignored, so "§ 4 ABS. 2"
/// counts as all-caps while "1234" does not.
fn is_all_caps(text: &str) -> bool {
    let mut has_uppercase = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_uppercase = true;
        }
    }
    has_uppercase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeadingRules;
    use crate::geometry::Quad;

    const PAGE_WIDTH: f32 = 1000.0;

    fn line(text: &str, x: f32, y: f32, width: f32, height: f32) -> Line {
        Line::new(Quad::axis_aligned(x, y, width, height), text, 0.9)
    }

    /// A body line: wide, left-aligned, mixed case.
    fn body(y: f32) -> Line {
        line("Regular body text", 50.0, y, 800.0, 10.0)
    }

    #[test]
    fn test_empty_page() {
        let (classified, median_h) = classify_lines(&[], PAGE_WIDTH, &LayoutConfig::default());
        assert!(classified.is_empty());
        assert_eq!(median_h, 0.0);
    }

    #[test]
    fn test_single_line_is_paragraph() {
        // Median equals the line's own height, so thresholds > 1.0 cannot
        // be exceeded.
        let lines = vec![line("Lonely", 100.0, 50.0, 300.0, 40.0)];
        let (classified, median_h) = classify_lines(&lines, PAGE_WIDTH, &LayoutConfig::default());
        assert_eq!(median_h, 40.0);
        assert_eq!(classified[0].level, LineLevel::Paragraph);
    }

    #[test]
    fn test_h1_by_relative_height() {
        // Heights [10, 10, 25], median 10: 25 > 1.8 × 10.
        let lines = vec![
            body(0.0),
            body(15.0),
            line("Chapter One", 50.0, 40.0, 400.0, 25.0),
        ];
        let (classified, median_h) = classify_lines(&lines, PAGE_WIDTH, &LayoutConfig::default());
        assert_eq!(median_h, 10.0);
        assert_eq!(classified[0].level, LineLevel::Paragraph);
        assert_eq!(classified[1].level, LineLevel::Paragraph);
        assert_eq!(classified[2].level, LineLevel::H1);
    }

    #[test]
    fn test_h1_takes_precedence_over_h2() {
        // A centered, narrow, very tall line satisfies both rules; H1 wins.
        let lines = vec![
            body(0.0),
            body(15.0),
            line("TITLE", 350.0, 50.0, 300.0, 30.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &LayoutConfig::default());
        assert_eq!(classified[2].level, LineLevel::H1);
    }

    #[test]
    fn test_h2_centered_rule() {
        // Height 16 with median 10: above 1.4×, below 1.8×. Centered at 500.
        let rules = HeadingRules {
            centered: true,
            all_caps: false,
            big_gap: false,
        };
        let config = LayoutConfig::default().with_heading_rules(rules);
        let lines = vec![
            body(0.0),
            body(15.0),
            line("Section title", 350.0, 60.0, 300.0, 16.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &config);
        assert_eq!(classified[2].level, LineLevel::H2);
    }

    #[test]
    fn test_h2_centered_rule_misses_off_center() {
        let rules = HeadingRules {
            centered: true,
            all_caps: false,
            big_gap: false,
        };
        let config = LayoutConfig::default().with_heading_rules(rules);
        // Same shape, but the line hugs the left margin.
        let lines = vec![
            body(0.0),
            body(15.0),
            line("Section title", 20.0, 60.0, 300.0, 16.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &config);
        assert_eq!(classified[2].level, LineLevel::Paragraph);
    }

    #[test]
    fn test_h2_all_caps_rule() {
        let rules = HeadingRules {
            centered: false,
            all_caps: true,
            big_gap: false,
        };
        let config = LayoutConfig::default().with_heading_rules(rules);
        let lines = vec![
            body(0.0),
            body(15.0),
            line("OVERVIEW", 20.0, 60.0, 300.0, 16.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &config);
        assert_eq!(classified[2].level, LineLevel::H2);
    }

    #[test]
    fn test_h2_big_gap_rule() {
        let rules = HeadingRules {
            centered: false,
            all_caps: false,
            big_gap: true,
        };
        let config = LayoutConfig::default().with_heading_rules(rules);
        // Previous line ends at y=25; gap of 35 > 0.8 × 10.
        let lines = vec![
            body(0.0),
            body(15.0),
            line("Quiet heading", 20.0, 60.0, 300.0, 16.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &config);
        assert_eq!(classified[2].level, LineLevel::H2);
    }

    #[test]
    fn test_h2_unreachable_with_all_rules_disabled() {
        let rules = HeadingRules {
            centered: false,
            all_caps: false,
            big_gap: false,
        };
        let config = LayoutConfig::default().with_heading_rules(rules);
        // A line that would satisfy every other H2 condition.
        let lines = vec![
            body(0.0),
            body(15.0),
            line("SECTION", 350.0, 80.0, 300.0, 16.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &config);
        assert_eq!(classified[2].level, LineLevel::Paragraph);
    }

    #[test]
    fn test_h2_requires_narrow_line() {
        // All-caps and tall enough, but spans 80% of the page.
        let lines = vec![
            body(0.0),
            body(15.0),
            line("WIDE HEADING LINE", 50.0, 60.0, 800.0, 16.0),
        ];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &LayoutConfig::default());
        assert_eq!(classified[2].level, LineLevel::Paragraph);
    }

    #[test]
    fn test_heights_carried_on_output() {
        let lines = vec![body(0.0), line("Tall", 50.0, 20.0, 100.0, 22.0)];
        let (classified, _) = classify_lines(&lines, PAGE_WIDTH, &LayoutConfig::default());
        assert_eq!(classified[0].height, 10.0);
        assert_eq!(classified[1].height, 22.0);
    }

    #[test]
    fn test_zero_height_lines_participate_in_median() {
        let lines = vec![
            line("", 0.0, 0.0, 100.0, 0.0),
            line("a", 0.0, 10.0, 100.0, 10.0),
            line("b", 0.0, 25.0, 100.0, 20.0),
        ];
        let (_, median_h) = classify_lines(&lines, PAGE_WIDTH, &LayoutConfig::default());
        assert_eq!(median_h, 10.0);
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[10.0, 20.0]), 15.0);
        assert_eq!(median(&[20.0, 10.0, 40.0, 30.0]), 25.0);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[30.0, 10.0, 20.0]), 20.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_is_all_caps() {
        assert!(is_all_caps("OVERVIEW"));
        assert!(is_all_caps("§ 4 ABS. 2"));
        assert!(!is_all_caps("Overview"));
        assert!(!is_all_caps("1234"));
        assert!(!is_all_caps(""));
    }
}
