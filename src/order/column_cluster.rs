//! Column-aware line ordering via horizontal clustering.

use crate::layout::Line;
use crate::order::{LineOrderStrategy, PositionalStrategy};

/// Maximum Lloyd iterations before accepting the current assignment.
const MAX_ITERATIONS: usize = 25;

/// Orders lines by clustering their horizontal midpoints into columns.
///
/// Runs a one-dimensional k-means over the lines' x-midpoints with
/// `k = min(max_columns, line count)`. Columns are ordered left to right
/// by centroid and lines within a column top to bottom, which yields the
/// reading order the classifier expects for multi-column scans.
///
/// Clustering is best-effort: when it degenerates, the strategy falls
/// back to [`PositionalStrategy`]. Degenerate means a single cluster
/// requested, an iteration stranding an empty cluster (all lines sharing
/// one midpoint), or clusters that overlap horizontally. K-means always
/// produces a split, so a single-column page must be detected by checking
/// that the split columns are actually disjoint in x.
pub struct ColumnClusterStrategy {
    max_columns: usize,
}

impl ColumnClusterStrategy {
    /// Create a strategy splitting into at most `max_columns` columns.
    pub fn new(max_columns: usize) -> Self {
        Self { max_columns }
    }
}

impl LineOrderStrategy for ColumnClusterStrategy {
    fn order(&self, lines: Vec<Line>, page_width: f32) -> Vec<Line> {
        let k = self.max_columns.min(lines.len());
        if k <= 1 {
            return PositionalStrategy.order(lines, page_width);
        }

        let midpoints: Vec<f32> = lines.iter().map(|l| l.bbox.center_x()).collect();
        let Some(clusters) = cluster_midpoints(&midpoints, k) else {
            log::debug!("column clustering degenerated, falling back to positional order");
            return PositionalStrategy.order(lines, page_width);
        };

        // Rank clusters left to right by centroid.
        let centroids = cluster_centroids(&midpoints, &clusters, k);
        let mut by_centroid: Vec<usize> = (0..k).collect();
        by_centroid.sort_by(|&a, &b| centroids[a].total_cmp(&centroids[b]));

        if !columns_are_separated(&lines, &clusters, &by_centroid) {
            log::debug!("clustered columns overlap, falling back to positional order");
            return PositionalStrategy.order(lines, page_width);
        }

        let mut column_rank = vec![0; k];
        for (rank, &cluster) in by_centroid.iter().enumerate() {
            column_rank[cluster] = rank;
        }

        let mut order: Vec<usize> = (0..lines.len()).collect();
        order.sort_by(|&a, &b| {
            column_rank[clusters[a]]
                .cmp(&column_rank[clusters[b]])
                .then_with(|| lines[a].bbox.top().total_cmp(&lines[b].bbox.top()))
        });

        let mut lines: Vec<Option<Line>> = lines.into_iter().map(Some).collect();
        order
            .into_iter()
            .filter_map(|i| lines[i].take())
            .collect()
    }

    fn name(&self) -> &'static str {
        "column-cluster"
    }
}

/// One-dimensional k-means (Lloyd's algorithm) over line midpoints.
///
/// Centroids start at evenly spaced order statistics of the input, which
/// converges quickly for the well-separated column gaps this is used on.
/// Returns the cluster index per value, or `None` when an assignment
/// leaves a cluster empty.
fn cluster_midpoints(values: &[f32], k: usize) -> Option<Vec<usize>> {
    debug_assert!(k >= 2 && k <= values.len());

    let mut sorted = values.to_vec();
    sorted.sort_by(f32::total_cmp);
    let mut centroids: Vec<f32> = (0..k)
        .map(|i| sorted[i * (values.len() - 1) / (k - 1)])
        .collect();

    let mut assignment = vec![0_usize; values.len()];
    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, &value) in values.iter().enumerate() {
            let nearest = nearest_centroid(&centroids, value);
            if assignment[i] != nearest {
                assignment[i] = nearest;
                changed = true;
            }
        }

        let mut sums = vec![0.0_f32; k];
        let mut counts = vec![0_usize; k];
        for (&cluster, &value) in assignment.iter().zip(values) {
            sums[cluster] += value;
            counts[cluster] += 1;
        }
        if counts.iter().any(|&c| c == 0) {
            return None;
        }
        for (centroid, (&sum, &count)) in centroids.iter_mut().zip(sums.iter().zip(&counts)) {
            *centroid = sum / count as f32;
        }

        if !changed {
            break;
        }
    }

    Some(assignment)
}

fn nearest_centroid(centroids: &[f32], value: f32) -> usize {
    let mut best = 0;
    let mut best_distance = f32::INFINITY;
    for (i, &centroid) in centroids.iter().enumerate() {
        let distance = (value - centroid).abs();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

/// Check that the clustered columns are pairwise disjoint in x.
///
/// `by_centroid` lists cluster indices left to right. Adjacent columns
/// whose line boxes overlap horizontally indicate a spurious split of a
/// single column rather than a real column layout.
fn columns_are_separated(lines: &[Line], assignment: &[usize], by_centroid: &[usize]) -> bool {
    let mut bounds: Vec<(f32, f32)> = vec![(f32::INFINITY, f32::NEG_INFINITY); by_centroid.len()];
    for (&cluster, line) in assignment.iter().zip(lines) {
        let (left, right) = &mut bounds[cluster];
        *left = left.min(line.bbox.left());
        *right = right.max(line.bbox.right());
    }

    by_centroid.windows(2).all(|pair| {
        let (_, prev_right) = bounds[pair[0]];
        let (next_left, _) = bounds[pair[1]];
        next_left >= prev_right
    })
}

fn cluster_centroids(values: &[f32], assignment: &[usize], k: usize) -> Vec<f32> {
    let mut sums = vec![0.0_f32; k];
    let mut counts = vec![0_usize; k];
    for (&cluster, &value) in assignment.iter().zip(values) {
        sums[cluster] += value;
        counts[cluster] += 1;
    }
    sums.iter()
        .zip(&counts)
        .map(|(&sum, &count)| sum / count.max(1) as f32)
        .collect()
}
