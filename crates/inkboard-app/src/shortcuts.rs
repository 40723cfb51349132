//! Keyboard shortcut registry and documentation.

use inkboard_core::{HistoryCommand, Modifiers};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub command: HistoryCommand,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        command: HistoryCommand,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Modifier state that triggers this shortcut.
    pub fn modifiers(&self) -> Modifiers {
        Modifiers {
            shift: self.shift,
            ctrl: self.ctrl,
            ..Default::default()
        }
    }
}

/// Registry of all keyboard shortcuts. Cmd works wherever Ctrl is listed.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, HistoryCommand::Undo, "Undo"),
            Shortcut::new("Y", true, false, HistoryCommand::Redo, "Redo"),
            Shortcut::new("Z", true, true, HistoryCommand::Redo, "Redo"),
        ]
    }

    /// Render all shortcuts as an aligned help block.
    pub fn help() -> String {
        let mut out = String::from("Keyboard shortcuts:\n");
        for shortcut in Self::all() {
            out.push_str(&format!("  {:20} {}\n", shortcut.format(), shortcut.description));
        }
        out
    }
}
