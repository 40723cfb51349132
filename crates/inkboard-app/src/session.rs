//! A board bound to a stored document.

use crate::error::AppResult;
use crate::replay::{Action, Script, ScriptStep};
use inkboard_core::{Board, BoardConfig, CanvasDocument, Element, Storage, StorageError, Toolbox};

/// Outcome of replaying a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub rejected: usize,
    pub saves: usize,
    pub failed_saves: usize,
}

/// Drives a [`Board`] from script steps and saves each committed collection.
///
/// Saves run to completion before the next step, but a failed save only logs;
/// the board keeps its in-memory state.
pub struct Session {
    board: Board,
    toolbox: Toolbox,
    storage: Box<dyn Storage>,
    document_id: String,
    document_name: String,
    saves: usize,
    failed_saves: usize,
}

impl Session {
    /// Open `document_id` from `storage`, or start an empty board if it does
    /// not exist yet.
    pub fn open(config: BoardConfig, storage: Box<dyn Storage>, document_id: &str) -> AppResult<Self> {
        let (board, name) = match pollster::block_on(storage.load(document_id)) {
            Ok(document) => {
                log::info!("Opened {} ({} elements)", document_id, document.elements.len());
                (Board::with_elements(config, document.elements), document.name)
            }
            Err(StorageError::NotFound(_)) => {
                log::info!("Starting new document {}", document_id);
                (Board::new(config), CanvasDocument::new().name)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            board,
            toolbox: Toolbox::new(),
            storage,
            document_id: document_id.to_string(),
            document_name: name,
            saves: 0,
            failed_saves: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn set_document_name(&mut self, name: impl Into<String>) {
        self.document_name = name.into();
    }

    /// Apply one step, then save if the board committed something.
    pub fn apply(&mut self, step: &ScriptStep) -> AppResult<()> {
        match step.action()? {
            Action::Board(event) => self.board.handle(event, &self.toolbox)?,
            Action::Style(change) => change.apply(&mut self.toolbox)?,
            Action::None => {}
        }
        if let Some(elements) = self.board.take_pending_save() {
            self.save(elements);
        }
        Ok(())
    }

    /// Replay every step. A rejected step is logged and skipped.
    pub fn run(&mut self, script: &Script) -> ReplaySummary {
        if let Some(name) = &script.name {
            self.set_document_name(name.clone());
        }
        let mut summary = ReplaySummary::default();
        for (index, step) in script.steps.iter().enumerate() {
            summary.steps += 1;
            if let Err(e) = self.apply(step) {
                log::warn!("Step {} rejected: {}", index, e);
                summary.rejected += 1;
            }
        }
        summary.saves = self.saves;
        summary.failed_saves = self.failed_saves;
        summary
    }

    fn save(&mut self, elements: Vec<Element>) {
        let document = CanvasDocument {
            id: self.document_id.clone(),
            name: self.document_name.clone(),
            elements,
        };
        match pollster::block_on(self.storage.save(&self.document_id, &document)) {
            Ok(()) => self.saves += 1,
            Err(e) => {
                log::error!("Failed to save document {}: {}", self.document_id, e);
                self.failed_saves += 1;
            }
        }
    }
}
