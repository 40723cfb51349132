//! Brush strokes.

use super::{ElementId, SerializableColor};
use crate::config::StrokeOptions;
use crate::geometry::{outline_path, stroke_outline};
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand brush stroke.
///
/// The filled outline is cached and rebuilt every time a sample is appended,
/// so it always matches the point sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FreehandRecord", into = "FreehandRecord")]
pub struct FreehandElement {
    id: ElementId,
    points: Vec<Point>,
    stroke_color: SerializableColor,
    size: f64,
    options: StrokeOptions,
    outline: Vec<Point>,
    path: BezPath,
}

impl FreehandElement {
    /// Start a stroke with its first sample.
    pub fn new(
        id: ElementId,
        start: Point,
        stroke_color: SerializableColor,
        size: f64,
        options: StrokeOptions,
    ) -> Self {
        Self::from_points(id, vec![start], stroke_color, size, options)
    }

    /// Build a stroke from existing samples.
    pub fn from_points(
        id: ElementId,
        points: Vec<Point>,
        stroke_color: SerializableColor,
        size: f64,
        options: StrokeOptions,
    ) -> Self {
        let mut stroke = Self {
            id,
            points,
            stroke_color,
            size,
            options,
            outline: Vec::new(),
            path: BezPath::new(),
        };
        stroke.rebuild();
        stroke
    }

    /// Append a sample and recompute the outline.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
        self.rebuild();
    }

    /// Append a sample drawn at the brush's current `size`. The whole outline
    /// is recomputed at that size.
    pub fn push_point_with_size(&mut self, point: Point, size: f64) {
        self.size = size;
        self.push_point(point);
    }

    fn rebuild(&mut self) {
        self.outline = stroke_outline(&self.points, self.size, &self.options);
        self.path = outline_path(&self.outline);
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Sampled pointer positions, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn stroke_color(&self) -> SerializableColor {
        self.stroke_color
    }

    /// Brush diameter.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    /// Outline polygon vertices.
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Closed fill path; empty when there is nothing to draw.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        let Some(&first) = self.outline.first() else {
            return Rect::ZERO;
        };
        self.outline
            .iter()
            .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p))
    }
}

/// Persisted form: samples and style only.
#[derive(Serialize, Deserialize)]
struct FreehandRecord {
    id: ElementId,
    points: Vec<Point>,
    stroke_color: SerializableColor,
    size: f64,
    #[serde(default)]
    options: StrokeOptions,
}

impl From<FreehandRecord> for FreehandElement {
    fn from(r: FreehandRecord) -> Self {
        FreehandElement::from_points(r.id, r.points, r.stroke_color, r.size, r.options)
    }
}

impl From<FreehandElement> for FreehandRecord {
    fn from(e: FreehandElement) -> Self {
        Self {
            id: e.id,
            points: e.points,
            stroke_color: e.stroke_color,
            size: e.size,
            options: e.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke() -> FreehandElement {
        FreehandElement::new(
            0,
            Point::new(0.0, 0.0),
            SerializableColor::black(),
            10.0,
            StrokeOptions::default(),
        )
    }

    #[test]
    fn test_new_stroke_has_one_point() {
        let s = stroke();
        assert_eq!(s.len(), 1);
        assert!(!s.outline().is_empty());
    }

    #[test]
    fn test_push_point_recomputes_outline() {
        let mut s = stroke();
        let before = s.outline().to_vec();
        s.push_point(Point::new(40.0, 0.0));
        assert_eq!(s.len(), 2);
        assert_ne!(s.outline(), before.as_slice());
        assert_eq!(s.outline(), stroke_outline(s.points(), 10.0, s.options()).as_slice());
    }

    #[test]
    fn test_cached_path_matches_fresh_derivation() {
        let mut s = stroke();
        for i in 1..10 {
            s.push_point(Point::new(i as f64 * 4.0, (i as f64).sin() * 3.0));
        }
        let fresh = outline_path(&stroke_outline(s.points(), s.size(), s.options()));
        assert_eq!(s.path(), &fresh);
    }

    #[test]
    fn test_empty_stroke_draws_nothing() {
        let s = FreehandElement::from_points(1, Vec::new(), SerializableColor::black(), 10.0, StrokeOptions::default());
        assert!(s.is_empty());
        assert!(s.outline().is_empty());
        assert_eq!(s.path().elements().len(), 0);
        assert_eq!(s.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_push_point_with_size_rebuilds_at_new_size() {
        let mut s = stroke();
        s.push_point(Point::new(20.0, 0.0));
        s.push_point_with_size(Point::new(40.0, 0.0), 30.0);
        assert!((s.size() - 30.0).abs() < f64::EPSILON);
        assert_eq!(s.outline(), stroke_outline(s.points(), 30.0, s.options()).as_slice());
    }

    #[test]
    fn test_bounds_cover_points() {
        let mut s = stroke();
        s.push_point(Point::new(50.0, 20.0));
        let b = s.bounds();
        assert!(b.x0 <= 0.0 && b.y0 <= 0.0);
        assert!(b.x1 > 20.0);
    }
}
