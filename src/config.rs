//! Configuration for page-structure analysis.
//!
//! All thresholds and toggles consumed by the line classifier, the block
//! builder, and the line orderer live in a single [`LayoutConfig`]. The
//! configuration is read-only for the duration of a page's processing;
//! no entity in this crate holds global mutable state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Toggleable extra conditions for the H2 heading rule.
///
/// A line that clears the H2 height threshold and the width constraint is
/// only classified H2 if at least one of the enabled rules fires. With all
/// three disabled, H2 is unreachable regardless of height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingRules {
    /// Line center within 5% of the page center
    pub centered: bool,
    /// Text is fully uppercase
    pub all_caps: bool,
    /// Vertical gap above the line exceeds 0.8 × median line height
    pub big_gap: bool,
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            centered: true,
            all_caps: true,
            big_gap: true,
        }
    }
}

impl HeadingRules {
    /// Check whether any extra rule is enabled at all.
    pub fn any_enabled(&self) -> bool {
        self.centered || self.all_caps || self.big_gap
    }
}

/// Page-structure analysis configuration.
///
/// Defaults are tuned for 300 DPI scans of book and report pages. Callers
/// should [`validate`](LayoutConfig::validate) a configuration before a run;
/// the analysis functions themselves stay total and simply apply the stated
/// rule precedence to whatever values they are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// H1 rule: height must exceed this factor × median line height.
    pub h1_threshold: f32,

    /// H2 rule: height must exceed this factor × median line height.
    ///
    /// Checked only when the H1 rule fails, so this should stay below
    /// `h1_threshold`; see [`validate`](LayoutConfig::validate).
    pub h2_threshold: f32,

    /// Extra conditions for the H2 rule.
    pub heading_rules: HeadingRules,

    /// Two paragraph lines merge only when the vertical gap between them is
    /// at most this factor × median line height.
    pub paragraph_merge_gap: f32,

    /// Two paragraph lines merge only when their left edges differ by at
    /// most this fraction of the page width.
    pub indent_tolerance: f32,

    /// Join a line ending in `-` with a following lowercase line by
    /// removing the hyphen (de-hyphenation across line breaks).
    pub hyphen_merge: bool,

    /// Join merged paragraph lines with newlines instead of spaces.
    pub keep_line_breaks: bool,

    /// Order lines into columns before classification.
    ///
    /// When disabled, lines are ordered by a plain top-to-bottom sort.
    pub column_detection: bool,

    /// Upper bound on the number of columns the orderer may split into.
    pub max_columns: usize,

    /// Regex patterns whose matches are stripped from every block's text.
    ///
    /// Applied in order after block building. Patterns must compile; see
    /// [`validate`](LayoutConfig::validate).
    pub cleanup_patterns: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            h1_threshold: 1.8,
            h2_threshold: 1.4,
            heading_rules: HeadingRules::default(),
            paragraph_merge_gap: 1.2,
            indent_tolerance: 0.04,
            hyphen_merge: true,
            keep_line_breaks: false,
            column_detection: true,
            max_columns: 2,
            cleanup_patterns: Vec::new(),
        }
    }
}

impl LayoutConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the H1 height threshold.
    pub fn with_h1_threshold(mut self, factor: f32) -> Self {
        self.h1_threshold = factor;
        self
    }

    /// Set the H2 height threshold.
    pub fn with_h2_threshold(mut self, factor: f32) -> Self {
        self.h2_threshold = factor;
        self
    }

    /// Set the extra H2 conditions.
    pub fn with_heading_rules(mut self, rules: HeadingRules) -> Self {
        self.heading_rules = rules;
        self
    }

    /// Set the paragraph merge gap factor.
    pub fn with_paragraph_merge_gap(mut self, factor: f32) -> Self {
        self.paragraph_merge_gap = factor;
        self
    }

    /// Set the indent tolerance as a fraction of page width.
    pub fn with_indent_tolerance(mut self, fraction: f32) -> Self {
        self.indent_tolerance = fraction;
        self
    }

    /// Enable or disable de-hyphenation across line breaks.
    pub fn with_hyphen_merge(mut self, enabled: bool) -> Self {
        self.hyphen_merge = enabled;
        self
    }

    /// Keep original line breaks when merging paragraph lines.
    pub fn with_keep_line_breaks(mut self, enabled: bool) -> Self {
        self.keep_line_breaks = enabled;
        self
    }

    /// Enable or disable column detection in the line orderer.
    pub fn with_column_detection(mut self, enabled: bool) -> Self {
        self.column_detection = enabled;
        self
    }

    /// Set the maximum number of columns.
    pub fn with_max_columns(mut self, count: usize) -> Self {
        self.max_columns = count;
        self
    }

    /// Set the cleanup patterns applied to block text.
    pub fn with_cleanup_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cleanup_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration.
    ///
    /// Rejects thresholds that cannot fire (≤ 1.0, or H2 at or above H1,
    /// which the first-match-wins precedence would silently shadow), an
    /// indent tolerance outside [0, 1], a non-positive merge gap, a zero
    /// column bound, and cleanup patterns that fail to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::config::LayoutConfig;
    ///
    /// assert!(LayoutConfig::default().validate().is_ok());
    /// assert!(LayoutConfig::default().with_h2_threshold(2.5).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.h1_threshold <= 1.0 {
            return Err(Error::InvalidThreshold {
                name: "h1_threshold",
                value: self.h1_threshold,
            });
        }
        if self.h2_threshold <= 1.0 {
            return Err(Error::InvalidThreshold {
                name: "h2_threshold",
                value: self.h2_threshold,
            });
        }
        if self.h2_threshold >= self.h1_threshold {
            return Err(Error::ThresholdOrder {
                h1: self.h1_threshold,
                h2: self.h2_threshold,
            });
        }
        if !(0.0..=1.0).contains(&self.indent_tolerance) {
            return Err(Error::InvalidIndentTolerance(self.indent_tolerance));
        }
        if self.paragraph_merge_gap <= 0.0 {
            return Err(Error::InvalidMergeGap(self.paragraph_merge_gap));
        }
        if self.max_columns == 0 {
            return Err(Error::InvalidColumnCount);
        }
        for pattern in &self.cleanup_patterns {
            if let Err(err) = regex::Regex::new(pattern) {
                return Err(Error::InvalidCleanupPattern {
                    pattern: pattern.clone(),
                    reason: err.to_string(),
                });
            }
        }
        Ok(())
    }
}
