//! Two-anchor shape elements: line, rectangle, ellipse and arrow.

use super::rough::RoughDescriptor;
use super::{ElementId, ShapeStyle};
use crate::geometry::arrow_head_points;
use crate::tools::ToolKind;
use kurbo::{BezPath, Ellipse, Point, Rect, Shape as _};
use serde::{Deserialize, Serialize};

/// Tolerance used when flattening ellipses into path segments.
const ELLIPSE_TOLERANCE: f64 = 0.1;

/// Geometric kind of a two-anchor shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
    Arrow,
}

impl ShapeKind {
    /// The tool that draws this shape.
    pub fn tool(self) -> ToolKind {
        match self {
            ShapeKind::Line => ToolKind::Line,
            ShapeKind::Rectangle => ToolKind::Rectangle,
            ShapeKind::Ellipse => ToolKind::Ellipse,
            ShapeKind::Arrow => ToolKind::Arrow,
        }
    }

    /// Shape kind drawn by a tool, if the tool draws two-anchor shapes.
    pub fn from_tool(tool: ToolKind) -> Option<Self> {
        match tool {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Ellipse => Some(ShapeKind::Ellipse),
            ToolKind::Arrow => Some(ShapeKind::Arrow),
            ToolKind::Brush | ToolKind::Text | ToolKind::Eraser => None,
        }
    }
}

/// Geometry parameters a shape's descriptor is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawParams {
    /// Hand-drawn jitter amplitude.
    pub roughness: f64,
    /// Arrow head wing length.
    pub arrow_head_length: f64,
    /// Arrow head wing angle in degrees.
    pub arrow_head_angle_deg: f64,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            arrow_head_length: 20.0,
            arrow_head_angle_deg: 20.0,
        }
    }
}

/// A shape defined by two anchor points.
///
/// Fields are read-only: the render descriptor is derived on construction,
/// and a changed shape is a new value built through [`ShapeElement::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShapeRecord", into = "ShapeRecord")]
pub struct ShapeElement {
    id: ElementId,
    kind: ShapeKind,
    start: Point,
    end: Point,
    style: ShapeStyle,
    params: DrawParams,
    descriptor: RoughDescriptor,
}

impl ShapeElement {
    /// Build a shape and derive its render descriptor.
    pub fn new(
        id: ElementId,
        kind: ShapeKind,
        start: Point,
        end: Point,
        style: ShapeStyle,
        params: DrawParams,
    ) -> Self {
        let descriptor = describe(id, kind, start, end, &style, &params);
        Self {
            id,
            kind,
            start,
            end,
            style,
            params,
            descriptor,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// First anchor (where the gesture started).
    pub fn start(&self) -> Point {
        self.start
    }

    /// Second anchor (where the pointer currently is, or was released).
    pub fn end(&self) -> Point {
        self.end
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Cached hand-drawn render descriptor.
    pub fn descriptor(&self) -> &RoughDescriptor {
        &self.descriptor
    }

    /// Seed for the hand-drawn effect, fixed by the element id.
    pub fn seed(&self) -> u32 {
        seed_for(self.id)
    }

    /// Arrow wing endpoints, for arrows only.
    pub fn arrow_head(&self) -> Option<(Point, Point)> {
        (self.kind == ShapeKind::Arrow).then(|| {
            arrow_head_points(
                self.start,
                self.end,
                self.params.arrow_head_length,
                self.params.arrow_head_angle_deg.to_radians(),
            )
        })
    }

    /// Clean (unjittered) outline path.
    pub fn outline(&self) -> BezPath {
        outline(self.kind, self.start, self.end, &self.params)
    }

    /// Axis-aligned box spanned by the anchors.
    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }
}

/// Seed for an element's hand-drawn effect.
fn seed_for(id: ElementId) -> u32 {
    (id as u32).wrapping_add(1)
}

fn outline(kind: ShapeKind, start: Point, end: Point, params: &DrawParams) -> BezPath {
    let mut path = BezPath::new();
    match kind {
        ShapeKind::Line => {
            path.move_to(start);
            path.line_to(end);
        }
        ShapeKind::Rectangle => {
            path.move_to(start);
            path.line_to(Point::new(end.x, start.y));
            path.line_to(end);
            path.line_to(Point::new(start.x, end.y));
            path.close_path();
        }
        ShapeKind::Ellipse => {
            path = Ellipse::from_rect(Rect::from_points(start, end)).to_path(ELLIPSE_TOLERANCE);
        }
        ShapeKind::Arrow => {
            let (wing1, wing2) = arrow_head_points(
                start,
                end,
                params.arrow_head_length,
                params.arrow_head_angle_deg.to_radians(),
            );
            // shaft-start → shaft-end → wing1 → shaft-end → wing2
            path.move_to(start);
            path.line_to(end);
            path.line_to(wing1);
            path.line_to(end);
            path.line_to(wing2);
        }
    }
    path
}

fn describe(
    id: ElementId,
    kind: ShapeKind,
    start: Point,
    end: Point,
    style: &ShapeStyle,
    params: &DrawParams,
) -> RoughDescriptor {
    let path = outline(kind, start, end, params);
    let closed = matches!(kind, ShapeKind::Rectangle | ShapeKind::Ellipse);
    let fill = (closed && style.fill_color.is_some()).then(|| path.clone());
    RoughDescriptor::build(&path, fill, style.fill_pattern, params.roughness, seed_for(id))
}

/// Persisted form: the defining fields only.
#[derive(Serialize, Deserialize)]
struct ShapeRecord {
    id: ElementId,
    kind: ShapeKind,
    start: Point,
    end: Point,
    style: ShapeStyle,
    #[serde(default)]
    params: DrawParams,
}

impl From<ShapeRecord> for ShapeElement {
    fn from(r: ShapeRecord) -> Self {
        ShapeElement::new(r.id, r.kind, r.start, r.end, r.style, r.params)
    }
}

impl From<ShapeElement> for ShapeRecord {
    fn from(e: ShapeElement) -> Self {
        Self {
            id: e.id,
            kind: e.kind,
            start: e.start,
            end: e.end,
            style: e.style,
            params: e.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::SerializableColor;
    use kurbo::PathEl;

    fn shape(kind: ShapeKind, id: ElementId) -> ShapeElement {
        ShapeElement::new(
            id,
            kind,
            Point::new(10.0, 10.0),
            Point::new(110.0, 60.0),
            ShapeStyle::default(),
            DrawParams::default(),
        )
    }

    #[test]
    fn test_descriptor_is_deterministic() {
        for kind in [ShapeKind::Line, ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Arrow] {
            assert_eq!(shape(kind, 4), shape(kind, 4));
        }
    }

    #[test]
    fn test_seed_follows_id() {
        assert_eq!(shape(ShapeKind::Line, 0).seed(), 1);
        assert_eq!(shape(ShapeKind::Line, 9).descriptor().seed, 10);
        assert_ne!(
            shape(ShapeKind::Line, 1).descriptor().strokes,
            shape(ShapeKind::Line, 2).descriptor().strokes
        );
    }

    #[test]
    fn test_arrow_outline_has_five_points() {
        let arrow = ShapeElement::new(
            0,
            ShapeKind::Arrow,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            ShapeStyle::default(),
            DrawParams::default(),
        );
        let path = arrow.outline();
        let points: Vec<Point> = path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect();

        let (wing1, wing2) = arrow.arrow_head().unwrap();
        assert_eq!(
            points,
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), wing1, Point::new(100.0, 0.0), wing2]
        );
    }

    #[test]
    fn test_fill_only_for_closed_shapes() {
        let style = ShapeStyle {
            fill_color: Some(SerializableColor::white()),
            ..Default::default()
        };
        let rect = ShapeElement::new(0, ShapeKind::Rectangle, Point::ZERO, Point::new(5.0, 5.0), style.clone(), DrawParams::default());
        let line = ShapeElement::new(0, ShapeKind::Line, Point::ZERO, Point::new(5.0, 5.0), style, DrawParams::default());
        assert!(rect.descriptor().fill.is_some());
        assert!(line.descriptor().fill.is_none());

        let unfilled = shape(ShapeKind::Ellipse, 0);
        assert!(unfilled.descriptor().fill.is_none());
    }

    #[test]
    fn test_arrow_head_only_for_arrows() {
        assert!(shape(ShapeKind::Rectangle, 0).arrow_head().is_none());
        assert!(shape(ShapeKind::Arrow, 0).arrow_head().is_some());
    }

    #[test]
    fn test_bounds_normalized() {
        let s = ShapeElement::new(
            0,
            ShapeKind::Rectangle,
            Point::new(50.0, 50.0),
            Point::new(10.0, 20.0),
            ShapeStyle::default(),
            DrawParams::default(),
        );
        assert_eq!(s.bounds(), Rect::new(10.0, 20.0, 50.0, 50.0));
    }
}
