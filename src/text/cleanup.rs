//! Regex-based cleanup of block text.
//!
//! Scans regularly carry recurring artifacts the OCR engine reads as
//! text: page numbers, running headers, stamp fragments. Callers supply
//! regex patterns for them and every match is stripped from the built
//! blocks' text.

use regex::Regex;

use crate::error::{Error, Result};

/// Compiled cleanup patterns applied to block text.
#[derive(Debug, Clone, Default)]
pub struct TextCleaner {
    patterns: Vec<Regex>,
}

impl TextCleaner {
    /// Compile a list of patterns into a cleaner.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCleanupPattern`] for the first pattern that
    /// fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::text::TextCleaner;
    ///
    /// let cleaner = TextCleaner::from_patterns(&["Seite \\d+".to_string()]).unwrap();
    /// assert_eq!(cleaner.clean("Text Seite 12 more"), "Text  more");
    /// ```
    pub fn from_patterns(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| Error::InvalidCleanupPattern {
                    pattern: pattern.clone(),
                    reason: err.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Strip all matches of every pattern, in pattern order.
    pub fn clean(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for pattern in &self.patterns {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
        cleaned
    }

    /// Check whether this cleaner has no patterns and is a no-op.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cleaner_is_noop() {
        let cleaner = TextCleaner::default();
        assert!(cleaner.is_empty());
        assert_eq!(cleaner.clean("unchanged"), "unchanged");
    }

    #[test]
    fn test_strips_all_matches() {
        let cleaner = TextCleaner::from_patterns(&["\\d+".to_string()]).unwrap();
        assert_eq!(cleaner.clean("a1b22c333"), "abc");
    }

    #[test]
    fn test_patterns_apply_in_order() {
        let cleaner =
            TextCleaner::from_patterns(&["foo".to_string(), "br".to_string()]).unwrap();
        // Stripping "br" re-creates a "foo", but the first pattern has
        // already run and does not see it.
        assert_eq!(cleaner.clean("fobrofoo bar"), "foo bar");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = TextCleaner::from_patterns(&["(unclosed".to_string()]);
        assert!(matches!(
            result,
            Err(Error::InvalidCleanupPattern { .. })
        ));
    }
}
