//! Tools and per-tool styling.

use crate::elements::SerializableColor;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Line,
    Rectangle,
    #[serde(alias = "circle")]
    Ellipse,
    Arrow,
    #[default]
    Brush,
    Eraser,
    Text,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Brush,
            ToolKind::Line,
            ToolKind::Rectangle,
            ToolKind::Ellipse,
            ToolKind::Arrow,
            ToolKind::Eraser,
            ToolKind::Text,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Ellipse => "ellipse",
            ToolKind::Arrow => "arrow",
            ToolKind::Brush => "brush",
            ToolKind::Eraser => "eraser",
            ToolKind::Text => "text",
        }
    }

    /// Whether the tool creates elements (everything but the eraser).
    pub fn draws(&self) -> bool {
        !matches!(self, ToolKind::Eraser)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ToolKind::Line),
            "rectangle" => Ok(ToolKind::Rectangle),
            "ellipse" | "circle" => Ok(ToolKind::Ellipse),
            "arrow" => Ok(ToolKind::Arrow),
            "brush" => Ok(ToolKind::Brush),
            "eraser" => Ok(ToolKind::Eraser),
            "text" => Ok(ToolKind::Text),
            other => Err(BoardError::InvalidToolKind(other.to_string())),
        }
    }
}

/// Style looked up for a tool at the moment an element is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolStyle {
    pub stroke_color: SerializableColor,
    pub fill_color: Option<SerializableColor>,
    /// Stroke width, brush diameter, or font size depending on the tool.
    pub size: f64,
}

impl ToolStyle {
    pub fn new(stroke_color: SerializableColor, fill_color: Option<SerializableColor>, size: f64) -> Self {
        Self {
            stroke_color,
            fill_color,
            size,
        }
    }
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self::new(SerializableColor::black(), None, 2.0)
    }
}

/// Source of per-tool styles, consulted on every draw and move event.
pub trait StyleSource {
    fn style_for(&self, tool: ToolKind) -> ToolStyle;
}

/// Per-tool style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toolbox {
    styles: HashMap<ToolKind, ToolStyle>,
}

impl Default for Toolbox {
    fn default() -> Self {
        let black = SerializableColor::black();
        let styles = HashMap::from([
            (ToolKind::Line, ToolStyle::new(black, None, 2.0)),
            (ToolKind::Rectangle, ToolStyle::new(black, None, 2.0)),
            (ToolKind::Ellipse, ToolStyle::new(black, None, 2.0)),
            (ToolKind::Arrow, ToolStyle::new(black, None, 2.0)),
            (ToolKind::Brush, ToolStyle::new(black, None, 10.0)),
            (ToolKind::Text, ToolStyle::new(black, None, 32.0)),
        ]);
        Self { styles }
    }
}

impl Toolbox {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, tool: ToolKind) -> &mut ToolStyle {
        self.styles.entry(tool).or_default()
    }

    pub fn set_stroke_color(&mut self, tool: ToolKind, color: SerializableColor) {
        self.entry(tool).stroke_color = color;
    }

    pub fn set_fill_color(&mut self, tool: ToolKind, color: Option<SerializableColor>) {
        self.entry(tool).fill_color = color;
    }

    pub fn set_size(&mut self, tool: ToolKind, size: f64) {
        self.entry(tool).size = size;
    }
}

impl StyleSource for Toolbox {
    fn style_for(&self, tool: ToolKind) -> ToolStyle {
        self.styles.get(&tool).cloned().unwrap_or_default()
    }
}

impl StyleSource for ToolStyle {
    fn style_for(&self, _tool: ToolKind) -> ToolStyle {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_names() {
        assert_eq!("rectangle".parse::<ToolKind>(), Ok(ToolKind::Rectangle));
        assert_eq!("CIRCLE".parse::<ToolKind>(), Ok(ToolKind::Ellipse));
        assert_eq!(" brush ".parse::<ToolKind>(), Ok(ToolKind::Brush));
        assert_eq!(
            "lasso".parse::<ToolKind>(),
            Err(BoardError::InvalidToolKind("lasso".to_string()))
        );
    }

    #[test]
    fn test_name_round_trip() {
        for tool in ToolKind::all() {
            assert_eq!(tool.name().parse::<ToolKind>(), Ok(*tool));
        }
    }

    #[test]
    fn test_default_tool_is_brush() {
        assert_eq!(ToolKind::default(), ToolKind::Brush);
        assert!(!ToolKind::Eraser.draws());
    }

    #[test]
    fn test_toolbox_defaults() {
        let toolbox = Toolbox::new();
        assert!((toolbox.style_for(ToolKind::Brush).size - 10.0).abs() < f64::EPSILON);
        assert!((toolbox.style_for(ToolKind::Text).size - 32.0).abs() < f64::EPSILON);
        assert!(toolbox.style_for(ToolKind::Rectangle).fill_color.is_none());
    }

    #[test]
    fn test_toolbox_updates_single_tool() {
        let mut toolbox = Toolbox::new();
        let red = SerializableColor::new(255, 0, 0, 255);
        toolbox.set_stroke_color(ToolKind::Line, red);
        toolbox.set_fill_color(ToolKind::Rectangle, Some(red));
        toolbox.set_size(ToolKind::Brush, 4.0);

        assert_eq!(toolbox.style_for(ToolKind::Line).stroke_color, red);
        assert_eq!(toolbox.style_for(ToolKind::Arrow).stroke_color, SerializableColor::black());
        assert_eq!(toolbox.style_for(ToolKind::Rectangle).fill_color, Some(red));
        assert!((toolbox.style_for(ToolKind::Brush).size - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_alias() {
        let tool: ToolKind = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(tool, ToolKind::Ellipse);
        assert_eq!(serde_json::to_string(&ToolKind::Ellipse).unwrap(), "\"ellipse\"");
    }
}
