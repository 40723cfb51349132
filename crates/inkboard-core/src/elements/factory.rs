//! Element construction from tool input.

use super::{DrawParams, Element, ElementId, FreehandElement, ShapeElement, ShapeKind, ShapeStyle, TextElement};
use crate::config::{BoardConfig, StrokeOptions};
use crate::error::{BoardError, BoardResult};
use crate::tools::{ToolKind, ToolStyle};
use kurbo::Point;

/// Builds elements for a tool from two anchors and a style.
///
/// Construction is deterministic: the same id, anchors, tool and style always
/// produce an identical element, so a shape can be rebuilt on every pointer
/// move without its hand-drawn jitter changing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementFactory {
    params: DrawParams,
    brush: StrokeOptions,
}

impl ElementFactory {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            params: DrawParams {
                roughness: config.roughness,
                arrow_head_length: config.arrow_head_length,
                arrow_head_angle_deg: config.arrow_head_angle_deg,
            },
            brush: config.brush,
        }
    }

    /// Create an element for `tool`.
    ///
    /// Shapes span `start`..`end`. A brush stroke starts with `start` as its
    /// only sample and a text element starts empty at `start`; both ignore
    /// `end`. The eraser has no element and fails with
    /// [`BoardError::InvalidToolKind`].
    pub fn create(
        &self,
        id: ElementId,
        start: Point,
        end: Point,
        tool: ToolKind,
        style: &ToolStyle,
    ) -> BoardResult<Element> {
        if let Some(kind) = ShapeKind::from_tool(tool) {
            let shape_style = ShapeStyle {
                stroke_color: style.stroke_color,
                fill_color: style.fill_color,
                stroke_width: style.size,
                ..Default::default()
            };
            return Ok(Element::Shape(ShapeElement::new(
                id,
                kind,
                start,
                end,
                shape_style,
                self.params,
            )));
        }

        match tool {
            ToolKind::Brush => Ok(Element::Freehand(FreehandElement::new(
                id,
                start,
                style.stroke_color,
                style.size,
                self.brush,
            ))),
            ToolKind::Text => Ok(Element::Text(TextElement::new(
                id,
                start,
                style.stroke_color,
                style.size,
            ))),
            other => Err(BoardError::InvalidToolKind(other.to_string())),
        }
    }
}
