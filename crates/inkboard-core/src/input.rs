//! Input events consumed by the board and key bindings for history commands.

use crate::tools::ToolKind;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Ctrl, or Cmd on macOS keyboards.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Discrete history commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryCommand {
    Undo,
    Redo,
}

impl HistoryCommand {
    /// Map a key press to a history command.
    ///
    /// Command+Z undoes; Command+Y and Command+Shift+Z redo.
    pub fn from_key(key: &str, modifiers: Modifiers) -> Option<Self> {
        if !modifiers.command() || modifiers.alt {
            return None;
        }
        match (key.to_ascii_lowercase().as_str(), modifiers.shift) {
            ("z", false) => Some(HistoryCommand::Undo),
            ("z", true) | ("y", false) => Some(HistoryCommand::Redo),
            _ => None,
        }
    }
}

/// Everything an input adapter can tell the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardEvent {
    /// Pointer pressed at an absolute canvas position.
    PointerDown(Point),
    /// Pointer moved.
    PointerMove(Point),
    /// Pointer released.
    PointerUp,
    /// The text input surface lost focus with this content.
    CommitText(String),
    /// Undo or redo.
    History(HistoryCommand),
    /// Switch tools.
    SelectTool(ToolKind),
}
