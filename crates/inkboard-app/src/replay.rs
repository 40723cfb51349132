//! Recorded input scripts.
//!
//! A script is a JSON object with an optional document name and a list of
//! steps, for example:
//!
//! ```json
//! {
//!   "name": "Sketch",
//!   "steps": [
//!     { "tool": "rectangle" },
//!     { "style": { "tool": "rectangle", "fill": "#ffcc00" } },
//!     { "down": { "x": 10.0, "y": 10.0 } },
//!     { "move": { "x": 120.0, "y": 80.0 } },
//!     "up",
//!     { "key": { "key": "z", "ctrl": true } }
//!   ]
//! }
//! ```

use crate::error::{AppError, AppResult};
use inkboard_core::{BoardEvent, HistoryCommand, Modifiers, SerializableColor, ToolKind, Toolbox};
use kurbo::Point;
use serde::Deserialize;
use std::path::Path;

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Select a tool by name.
    Tool(String),
    /// Change the style of one tool.
    Style(StyleChange),
    Down(Point),
    Move(Point),
    Up,
    /// Content typed into the text surface, committed on blur.
    Text(String),
    /// A key press, mapped through the history key bindings.
    Key(KeyPress),
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StyleChange {
    pub tool: ToolKind,
    /// `#rrggbb` or `#rrggbbaa`.
    #[serde(default)]
    pub stroke: Option<String>,
    /// A color, or `"none"` to clear the fill.
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub size: Option<f64>,
}

impl StyleChange {
    /// Apply to the toolbox.
    pub fn apply(&self, toolbox: &mut Toolbox) -> AppResult<()> {
        if let Some(stroke) = &self.stroke {
            toolbox.set_stroke_color(self.tool, parse_color(stroke)?);
        }
        if let Some(fill) = &self.fill {
            let fill = if fill.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_color(fill)?)
            };
            toolbox.set_fill_color(self.tool, fill);
        }
        if let Some(size) = self.size {
            toolbox.set_size(self.tool, size);
        }
        Ok(())
    }
}

fn parse_color(s: &str) -> AppResult<SerializableColor> {
    SerializableColor::from_hex(s).ok_or_else(|| AppError::Script(format!("bad color {:?}", s)))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyPress {
    pub key: String,
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

/// What a step asks of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Board(BoardEvent),
    Style(StyleChange),
    /// Nothing to do (an unbound key).
    None,
}

impl ScriptStep {
    /// Resolve the step into a board event or toolbox change.
    pub fn action(&self) -> AppResult<Action> {
        let event = match self {
            ScriptStep::Tool(name) => BoardEvent::SelectTool(name.parse()?),
            ScriptStep::Style(change) => return Ok(Action::Style(change.clone())),
            ScriptStep::Down(point) => BoardEvent::PointerDown(*point),
            ScriptStep::Move(point) => BoardEvent::PointerMove(*point),
            ScriptStep::Up => BoardEvent::PointerUp,
            ScriptStep::Text(content) => BoardEvent::CommitText(content.clone()),
            ScriptStep::Key(press) => match HistoryCommand::from_key(&press.key, press.modifiers) {
                Some(command) => BoardEvent::History(command),
                None => {
                    log::debug!("Unbound key {:?}", press.key);
                    return Ok(Action::None);
                }
            },
            ScriptStep::Undo => BoardEvent::History(HistoryCommand::Undo),
            ScriptStep::Redo => BoardEvent::History(HistoryCommand::Redo),
        };
        Ok(Action::Board(event))
    }
}

/// A parsed script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| AppError::Script(e.to_string()))
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
