//! Simple positional line ordering.

use crate::layout::Line;
use crate::order::LineOrderStrategy;

/// Stable top-to-bottom ordering by the top edge of each line's box.
///
/// This is the fallback for pages where column detection is disabled or
/// degenerates. Single-column pages arriving in detection order are
/// usually already sorted; the stable sort preserves the detector's order
/// for lines sharing the same top edge.
pub struct PositionalStrategy;

impl LineOrderStrategy for PositionalStrategy {
    fn order(&self, mut lines: Vec<Line>, _page_width: f32) -> Vec<Line> {
        lines.sort_by(|a, b| a.bbox.top().total_cmp(&b.bbox.top()));
        lines
    }

    fn name(&self) -> &'static str {
        "positional"
    }
}
