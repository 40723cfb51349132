//! Eraser hit-testing.

use crate::elements::{ApproximateTextMeasure, Element, ShapeKind, TextMeasure};
use crate::geometry::{is_point_near_box_edges, is_point_near_segment};
use kurbo::{Point, Shape as _};
use std::fmt;

/// Decides whether a query point touches an element.
pub struct HitTester {
    threshold: f64,
    measure: Box<dyn TextMeasure>,
}

impl HitTester {
    pub fn new(threshold: f64, measure: Box<dyn TextMeasure>) -> Self {
        Self { threshold, measure }
    }

    /// Check whether `point` is on or near `element`.
    ///
    /// - Lines and arrows: near the shaft (arrow wings are ignored).
    /// - Rectangles and ellipses: near an edge of the anchor box. Ellipses
    ///   are tested against their bounding box, not the curve.
    /// - Brush strokes: inside the filled outline.
    /// - Text: near an edge of the measured text box.
    pub fn is_near(&self, element: &Element, point: Point) -> bool {
        match element {
            Element::Shape(shape) => match shape.kind() {
                ShapeKind::Line | ShapeKind::Arrow => {
                    is_point_near_segment(shape.start(), shape.end(), point, self.threshold)
                }
                ShapeKind::Rectangle | ShapeKind::Ellipse => {
                    is_point_near_box_edges(shape.start(), shape.end(), point, self.threshold)
                }
            },
            Element::Freehand(stroke) => stroke.path().contains(point),
            Element::Text(text) => {
                let bounds = text.bounds(self.measure.as_ref());
                is_point_near_box_edges(
                    Point::new(bounds.x0, bounds.y0),
                    Point::new(bounds.x1, bounds.y1),
                    point,
                    self.threshold,
                )
            }
        }
    }
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new(5.0, Box::new(ApproximateTextMeasure::default()))
    }
}

impl fmt::Debug for HitTester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitTester")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementFactory, SerializableColor, TextElement};
    use crate::tools::{ToolKind, ToolStyle};

    fn element(tool: ToolKind, start: Point, end: Point) -> Element {
        ElementFactory::default()
            .create(0, start, end, tool, &ToolStyle::default())
            .unwrap()
    }

    #[test]
    fn test_line_hit() {
        let hit = HitTester::default();
        let line = element(ToolKind::Line, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(hit.is_near(&line, Point::new(40.0, 2.0)));
        assert!(!hit.is_near(&line, Point::new(40.0, 20.0)));
        assert!(!hit.is_near(&line, Point::new(140.0, 0.0)));
    }

    #[test]
    fn test_arrow_uses_shaft() {
        let hit = HitTester::default();
        let arrow = element(ToolKind::Arrow, Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(hit.is_near(&arrow, Point::new(60.0, 1.0)));
        assert!(!hit.is_near(&arrow, Point::new(60.0, 30.0)));
    }

    #[test]
    fn test_rectangle_edges_only() {
        let hit = HitTester::default();
        let rect = element(ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        assert!(hit.is_near(&rect, Point::new(50.0, 2.0)));
        assert!(hit.is_near(&rect, Point::new(98.0, 50.0)));
        assert!(!hit.is_near(&rect, Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_ellipse_uses_bounding_box() {
        let hit = HitTester::default();
        let ellipse = element(ToolKind::Ellipse, Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        // Box corner is far from the curve but still counts.
        assert!(hit.is_near(&ellipse, Point::new(1.0, 1.0)));
        assert!(!hit.is_near(&ellipse, Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_brush_inside_outline() {
        let hit = HitTester::default();
        let mut brush = element(ToolKind::Brush, Point::new(0.0, 0.0), Point::new(0.0, 0.0));
        if let Element::Freehand(stroke) = &mut brush {
            for i in 1..=20 {
                stroke.push_point(Point::new(i as f64 * 5.0, 0.0));
            }
        }
        assert!(hit.is_near(&brush, Point::new(50.0, 0.0)));
        assert!(!hit.is_near(&brush, Point::new(50.0, 40.0)));
    }

    #[test]
    fn test_text_box_edges() {
        let hit = HitTester::new(5.0, Box::new(ApproximateTextMeasure { char_width: 0.5 }));
        let mut text = TextElement::new(0, Point::new(0.0, 0.0), SerializableColor::black(), 20.0);
        text.set_content("hello");
        let text = Element::Text(text);
        // Box is 50 x 20.
        assert!(hit.is_near(&text, Point::new(25.0, 1.0)));
        assert!(hit.is_near(&text, Point::new(49.0, 10.0)));
        assert!(!hit.is_near(&text, Point::new(80.0, 10.0)));
    }
}
