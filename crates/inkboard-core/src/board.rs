//! Drawing state machine: turns pointer, text and history events into element
//! collection changes.

use crate::config::BoardConfig;
use crate::elements::{ApproximateTextMeasure, Element, ElementFactory, TextElement, TextMeasure};
use crate::error::BoardResult;
use crate::hit::HitTester;
use crate::history::History;
use crate::input::{BoardEvent, HistoryCommand};
use crate::tools::{StyleSource, ToolKind};
use kurbo::Point;

/// What the active tool is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPhase {
    #[default]
    Idle,
    /// A shape or brush stroke is following the pointer.
    Drawing,
    /// The eraser is held down.
    Erasing,
    /// A text element is waiting for its content.
    Writing,
}

/// The whiteboard: element collection, history and the active gesture.
#[derive(Debug)]
pub struct Board {
    config: BoardConfig,
    factory: ElementFactory,
    hit: HitTester,
    active_tool: ToolKind,
    phase: ToolPhase,
    elements: Vec<Element>,
    history: History,
    /// The current erase gesture removed at least one element.
    erased: bool,
    pending_save: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Create an empty board.
    pub fn new(config: BoardConfig) -> Self {
        Self::with_elements(config, Vec::new())
    }

    /// Create a board whose history starts at `elements`.
    pub fn with_elements(config: BoardConfig, elements: Vec<Element>) -> Self {
        let measure = ApproximateTextMeasure {
            char_width: config.text_char_width,
        };
        Self {
            factory: ElementFactory::new(&config),
            hit: HitTester::new(config.erase_threshold, Box::new(measure)),
            active_tool: ToolKind::default(),
            phase: ToolPhase::Idle,
            history: History::new(elements.clone()).with_limit(config.history_limit),
            elements,
            erased: false,
            pending_save: false,
            config,
        }
    }

    /// Replace the text measurer used by eraser hit-tests.
    pub fn with_text_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.hit = HitTester::new(self.config.erase_threshold, measure);
        self
    }

    /// Replace the whole board with a loaded collection. History restarts.
    pub fn load(&mut self, elements: Vec<Element>) {
        log::info!("Loading board with {} elements", elements.len());
        self.history.reset(elements.clone());
        self.elements = elements;
        self.phase = ToolPhase::Idle;
        self.erased = false;
        self.pending_save = false;
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn phase(&self) -> ToolPhase {
        self.phase
    }

    /// The visible collection, including an in-progress element.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Switch tools. Refused (returns false) while a gesture is in progress.
    pub fn set_tool(&mut self, tool: ToolKind) -> bool {
        if self.phase != ToolPhase::Idle {
            log::warn!("Cannot switch to {} while {:?}", tool, self.phase);
            return false;
        }
        log::debug!("Tool: {} -> {}", self.active_tool, tool);
        self.active_tool = tool;
        true
    }

    /// Start a gesture at `point`.
    ///
    /// The eraser enters [`ToolPhase::Erasing`]. Any other tool appends a new
    /// element whose id is the collection length before insertion. Ignored
    /// unless idle.
    pub fn pointer_down<S: StyleSource + ?Sized>(&mut self, point: Point, styles: &S) -> BoardResult<()> {
        if self.phase != ToolPhase::Idle {
            log::trace!("Ignoring pointer down while {:?}", self.phase);
            return Ok(());
        }

        if self.active_tool == ToolKind::Eraser {
            self.phase = ToolPhase::Erasing;
            self.erased = false;
            return Ok(());
        }

        let id = self.elements.len();
        let style = styles.style_for(self.active_tool);
        let element = self.factory.create(id, point, point, self.active_tool, &style)?;
        self.elements.push(element);
        self.phase = if self.active_tool == ToolKind::Text {
            ToolPhase::Writing
        } else {
            ToolPhase::Drawing
        };
        log::debug!("Started {} element {} at ({}, {})", self.active_tool, id, point.x, point.y);
        Ok(())
    }

    /// Follow the pointer.
    ///
    /// While drawing, a shape is rebuilt from its initial start anchor to
    /// `point` and a brush stroke gains a sample. While erasing, every element
    /// near `point` is removed and the result committed to history.
    pub fn pointer_move<S: StyleSource + ?Sized>(&mut self, point: Point, styles: &S) -> BoardResult<()> {
        match self.phase {
            ToolPhase::Drawing => {
                let Some(last) = self.elements.last_mut() else {
                    log::warn!("Drawing with an empty collection");
                    return Ok(());
                };
                match last {
                    Element::Shape(shape) => {
                        let (id, start) = (shape.id(), shape.start());
                        let style = styles.style_for(self.active_tool);
                        *last = self.factory.create(id, start, point, self.active_tool, &style)?;
                    }
                    Element::Freehand(stroke) => {
                        let size = styles.style_for(self.active_tool).size;
                        stroke.push_point_with_size(point, size);
                    }
                    Element::Text(_) => {}
                }
                log::trace!("Drawing to ({}, {})", point.x, point.y);
            }
            ToolPhase::Erasing => self.erase_at(point),
            ToolPhase::Idle | ToolPhase::Writing => {}
        }
        Ok(())
    }

    /// Finish the gesture.
    ///
    /// A finished drawing is committed to history. Ignored while writing; the
    /// text element stays open until [`Board::commit_text`].
    pub fn pointer_up(&mut self) {
        match self.phase {
            ToolPhase::Drawing => {
                self.history.commit(self.elements.clone());
                self.pending_save = true;
                self.phase = ToolPhase::Idle;
                log::debug!("Committed drawing, history at {}", self.history.cursor());
            }
            ToolPhase::Erasing => {
                if self.erased {
                    self.pending_save = true;
                }
                self.erased = false;
                self.phase = ToolPhase::Idle;
            }
            ToolPhase::Idle | ToolPhase::Writing => {}
        }
    }

    /// Give the open text element its content and commit it.
    ///
    /// Ignored unless writing. Empty content still commits, leaving an empty
    /// text element in the collection.
    pub fn commit_text(&mut self, content: &str) {
        if self.phase != ToolPhase::Writing {
            log::trace!("Ignoring text commit while {:?}", self.phase);
            return;
        }
        self.phase = ToolPhase::Idle;
        let Some(Element::Text(text)) = self.elements.last_mut() else {
            log::warn!("Writing without an open text element");
            return;
        };
        text.set_content(content);
        let id = text.id();
        self.history.commit(self.elements.clone());
        self.pending_save = true;
        log::debug!("Committed text element {}", id);
    }

    /// Step back one history snapshot, abandoning any gesture in progress.
    ///
    /// At the oldest snapshot this does nothing at all.
    pub fn undo(&mut self) {
        if !self.history.can_undo() {
            log::trace!("Nothing to undo");
            return;
        }
        self.elements = self.history.undo().to_vec();
        self.settle_after_history();
    }

    /// Step forward one history snapshot, abandoning any gesture in progress.
    ///
    /// At the newest snapshot this does nothing at all.
    pub fn redo(&mut self) {
        if !self.history.can_redo() {
            log::trace!("Nothing to redo");
            return;
        }
        self.elements = self.history.redo().to_vec();
        self.settle_after_history();
    }

    /// The text element awaiting content, if any.
    pub fn text_overlay(&self) -> Option<&TextElement> {
        if self.phase != ToolPhase::Writing {
            return None;
        }
        self.elements.last().and_then(Element::as_text)
    }

    /// The collection to persist, if it changed since the last call.
    pub fn take_pending_save(&mut self) -> Option<Vec<Element>> {
        if !std::mem::take(&mut self.pending_save) {
            return None;
        }
        Some(self.elements.clone())
    }

    /// Dispatch an input event.
    pub fn handle<S: StyleSource + ?Sized>(&mut self, event: BoardEvent, styles: &S) -> BoardResult<()> {
        match event {
            BoardEvent::PointerDown(point) => self.pointer_down(point, styles)?,
            BoardEvent::PointerMove(point) => self.pointer_move(point, styles)?,
            BoardEvent::PointerUp => self.pointer_up(),
            BoardEvent::CommitText(content) => self.commit_text(&content),
            BoardEvent::History(HistoryCommand::Undo) => self.undo(),
            BoardEvent::History(HistoryCommand::Redo) => self.redo(),
            BoardEvent::SelectTool(tool) => {
                self.set_tool(tool);
            }
        }
        Ok(())
    }

    fn erase_at(&mut self, point: Point) {
        let before = self.elements.len();
        let hit = &self.hit;
        self.elements.retain(|element| !hit.is_near(element, point));
        let removed = before - self.elements.len();
        if removed > 0 {
            self.history.commit(self.elements.clone());
            self.erased = true;
            log::debug!("Erased {} elements at ({}, {})", removed, point.x, point.y);
        }
    }

    fn settle_after_history(&mut self) {
        self.phase = ToolPhase::Idle;
        self.erased = false;
        self.pending_save = true;
        log::debug!("History cursor at {} of {}", self.history.cursor(), self.history.len());
    }
}
