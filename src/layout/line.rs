//! Recognized text lines and their structural classification.

use serde::{Deserialize, Serialize};

use crate::geometry::Quad;

/// Structural level of a line or block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineLevel {
    /// Main heading (tallest lines on the page)
    #[serde(rename = "h1")]
    H1,
    /// Section heading
    #[serde(rename = "h2")]
    H2,
    /// Regular body text
    #[serde(rename = "p")]
    Paragraph,
}

impl LineLevel {
    /// Check if this is a heading level (H1 or H2).
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::layout::LineLevel;
    ///
    /// assert!(LineLevel::H1.is_heading());
    /// assert!(LineLevel::H2.is_heading());
    /// assert!(!LineLevel::Paragraph.is_heading());
    /// ```
    pub fn is_heading(&self) -> bool {
        matches!(self, LineLevel::H1 | LineLevel::H2)
    }
}

/// One recognized text line as reported by the OCR engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Quadrilateral bounding box of the detection
    pub bbox: Quad,
    /// Recognized text, possibly empty
    #[serde(default)]
    pub text: String,
    /// Recognition confidence in [0, 1]; carried through, never consulted
    /// by classification
    #[serde(rename = "conf", default)]
    pub confidence: f32,
}

impl Line {
    /// Create a line from its detection geometry, text, and confidence.
    pub fn new(bbox: Quad, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            bbox,
            text: text.into(),
            confidence,
        }
    }
}

/// A line augmented with its structural classification.
///
/// Created once by the classifier and never mutated afterwards; the block
/// builder only reads it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedLine {
    /// The underlying recognized line
    #[serde(flatten)]
    pub line: Line,
    /// Assigned structural level
    pub level: LineLevel,
    /// Derived line height (max y − min y over the bbox points)
    pub height: f32,
}

impl ClassifiedLine {
    /// The recognized text of the underlying line.
    pub fn text(&self) -> &str {
        &self.line.text
    }

    /// The detection geometry of the underlying line.
    pub fn bbox(&self) -> &Quad {
        &self.line.bbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Quad;

    #[test]
    fn test_level_is_heading() {
        assert!(LineLevel::H1.is_heading());
        assert!(LineLevel::H2.is_heading());
        assert!(!LineLevel::Paragraph.is_heading());
    }

    #[test]
    fn test_level_serde_names() {
        assert_eq!(serde_json::to_string(&LineLevel::H1).unwrap(), "\"h1\"");
        assert_eq!(serde_json::to_string(&LineLevel::H2).unwrap(), "\"h2\"");
        assert_eq!(
            serde_json::to_string(&LineLevel::Paragraph).unwrap(),
            "\"p\""
        );
    }

    #[test]
    fn test_line_deserializes_ocr_shape() {
        // The wire shape produced by the OCR adapter: bbox, text, conf.
        let json = r#"{
            "bbox": [{"x": 0.0, "y": 0.0}, {"x": 90.0, "y": 0.0},
                     {"x": 90.0, "y": 12.0}, {"x": 0.0, "y": 12.0}],
            "text": "Hello",
            "conf": 0.93
        }"#;
        let line: Line = serde_json::from_str(json).unwrap();
        assert_eq!(line.text, "Hello");
        assert_eq!(line.confidence, 0.93);
        assert_eq!(line.bbox.height(), 12.0);
    }

    #[test]
    fn test_line_missing_text_is_empty() {
        let json = r#"{
            "bbox": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0},
                     {"x": 1.0, "y": 1.0}, {"x": 0.0, "y": 1.0}]
        }"#;
        let line: Line = serde_json::from_str(json).unwrap();
        assert_eq!(line.text, "");
        assert_eq!(line.confidence, 0.0);
    }

    #[test]
    fn test_classified_line_accessors() {
        let line = Line::new(Quad::axis_aligned(5.0, 0.0, 40.0, 10.0), "text", 0.8);
        let classified = ClassifiedLine {
            line,
            level: LineLevel::Paragraph,
            height: 10.0,
        };
        assert_eq!(classified.text(), "text");
        assert_eq!(classified.bbox().left(), 5.0);
    }
}
