//! Text elements and text measurement.

use super::{ElementId, SerializableColor};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A text element.
///
/// Created empty when the text tool is pressed; its content is filled in once,
/// when the writing gesture is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    id: ElementId,
    /// Top-left corner of the text box.
    pub anchor: Point,
    /// Text color.
    pub stroke_color: SerializableColor,
    /// Font size in pixels.
    pub font_size: f64,
    content: String,
}

impl TextElement {
    /// Create an empty text element.
    pub fn new(id: ElementId, anchor: Point, stroke_color: SerializableColor, font_size: f64) -> Self {
        Self {
            id,
            anchor,
            stroke_color,
            font_size,
            content: String::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Text box from the anchor and the measured size.
    pub fn bounds(&self, measure: &dyn TextMeasure) -> Rect {
        let (width, height) = measure.measure(&self.content, self.font_size);
        Rect::new(
            self.anchor.x,
            self.anchor.y,
            self.anchor.x + width,
            self.anchor.y + height,
        )
    }
}

/// Measures laid-out text. Implemented by whatever owns the real fonts.
pub trait TextMeasure {
    /// Width and height of `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// Font-agnostic estimate from character counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasure {
    /// Average glyph width as a fraction of the font size.
    pub char_width: f64,
}

impl Default for ApproximateTextMeasure {
    fn default() -> Self {
        Self { char_width: 0.55 }
    }
}

impl TextMeasure for ApproximateTextMeasure {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        (
            widest as f64 * font_size * self.char_width,
            lines as f64 * font_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_text_is_empty() {
        let t = TextElement::new(3, Point::new(5.0, 5.0), SerializableColor::black(), 32.0);
        assert_eq!(t.id(), 3);
        assert_eq!(t.content(), "");
    }

    #[test]
    fn test_measure_single_line() {
        let m = ApproximateTextMeasure { char_width: 0.5 };
        let (w, h) = m.measure("hello", 20.0);
        assert!((w - 50.0).abs() < f64::EPSILON);
        assert!((h - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_measure_multiline() {
        let m = ApproximateTextMeasure { char_width: 0.5 };
        let (w, h) = m.measure("hi\nthere", 10.0);
        assert!((w - 25.0).abs() < f64::EPSILON);
        assert!((h - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_text_has_line_height() {
        let (w, h) = ApproximateTextMeasure::default().measure("", 32.0);
        assert!(w.abs() < f64::EPSILON);
        assert!((h - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let mut t = TextElement::new(0, Point::new(10.0, 20.0), SerializableColor::black(), 10.0);
        t.set_content("abcd");
        let b = t.bounds(&ApproximateTextMeasure { char_width: 0.5 });
        assert_eq!(b, Rect::new(10.0, 20.0, 30.0, 30.0));
    }
}
