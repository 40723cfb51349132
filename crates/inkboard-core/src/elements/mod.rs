//! Drawing elements.
//!
//! The element collection is the board's canonical state. Order is z-order:
//! later elements draw on top.

mod factory;
mod freehand;
mod rough;
mod shape;
mod text;

pub use factory::ElementFactory;
pub use freehand::FreehandElement;
pub use rough::{FillPattern, RoughDescriptor};
pub use shape::{DrawParams, ShapeElement, ShapeKind};
pub use text::{ApproximateTextMeasure, TextElement, TextMeasure};

use crate::tools::ToolKind;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Element identifier: the element's index in the collection when it was
/// created. Stable for the element's lifetime.
pub type ElementId = usize;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` color.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Style properties for shape elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke_color: SerializableColor,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill pattern style.
    #[serde(default)]
    pub fill_pattern: FillPattern,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: SerializableColor::black(),
            fill_color: None,
            stroke_width: 2.0,
            fill_pattern: FillPattern::default(),
        }
    }
}

/// A drawn element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    /// Line, rectangle, ellipse or arrow defined by two anchors.
    Shape(ShapeElement),
    /// Brush stroke.
    Freehand(FreehandElement),
    /// Text placed at an anchor.
    Text(TextElement),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Shape(e) => e.id(),
            Element::Freehand(e) => e.id(),
            Element::Text(e) => e.id(),
        }
    }

    /// The tool that draws this kind of element.
    pub fn tool(&self) -> ToolKind {
        match self {
            Element::Shape(e) => e.kind().tool(),
            Element::Freehand(_) => ToolKind::Brush,
            Element::Text(_) => ToolKind::Text,
        }
    }

    /// First anchor: shape start, first brush sample, or text position.
    pub fn anchor(&self) -> Point {
        match self {
            Element::Shape(e) => e.start(),
            Element::Freehand(e) => e.points().first().copied().unwrap_or(Point::ZERO),
            Element::Text(e) => e.anchor,
        }
    }

    pub fn stroke_color(&self) -> SerializableColor {
        match self {
            Element::Shape(e) => e.style().stroke_color,
            Element::Freehand(e) => e.stroke_color(),
            Element::Text(e) => e.stroke_color,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeElement> {
        match self {
            Element::Shape(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_freehand(&self) -> Option<&FreehandElement> {
        match self {
            Element::Freehand(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(e) => Some(e),
            _ => None,
        }
    }
}

/// Serialize an element collection to JSON.
pub fn elements_to_json(elements: &[Element]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(elements)
}

/// Deserialize an element collection from JSON, rebuilding derived render data.
pub fn elements_from_json(json: &str) -> Result<Vec<Element>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let color = SerializableColor::from_hex("#ff8000").unwrap();
        assert_eq!(color, SerializableColor::new(255, 128, 0, 255));
        assert_eq!(color.to_hex(), "#ff8000");

        let translucent = SerializableColor::from_hex("#00000080").unwrap();
        assert_eq!(translucent.a, 128);
        assert_eq!(translucent.to_hex(), "#00000080");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(SerializableColor::from_hex("ff8000").is_none());
        assert!(SerializableColor::from_hex("#ff80").is_none());
        assert!(SerializableColor::from_hex("#gg0000").is_none());
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = SerializableColor::new(10, 20, 30, 255).into();
        let back = SerializableColor::from(color);
        assert_eq!(back, SerializableColor::new(10, 20, 30, 255));
    }

    #[test]
    fn test_json_rebuilds_derived_data() {
        let factory = ElementFactory::default();
        let style = crate::tools::ToolStyle::default();
        let rect = factory
            .create(0, Point::new(0.0, 0.0), Point::new(50.0, 40.0), ToolKind::Rectangle, &style)
            .unwrap();
        let mut brush = factory
            .create(1, Point::new(10.0, 10.0), Point::new(10.0, 10.0), ToolKind::Brush, &style)
            .unwrap();
        if let Element::Freehand(f) = &mut brush {
            f.push_point(Point::new(30.0, 12.0));
        }

        let elements = vec![rect, brush];
        let json = elements_to_json(&elements).unwrap();
        let loaded = elements_from_json(&json).unwrap();
        assert_eq!(loaded, elements);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result = elements_from_json(r#"[{ "Polygon": { "id": 0 } }]"#);
        assert!(result.is_err());
    }
}
