//! Inkboard Core Library
//!
//! Platform-agnostic whiteboard model: hand-drawn elements, eraser
//! hit-testing, linear undo/redo history and the drawing state machine that
//! ties them to pointer input.

pub mod board;
pub mod config;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod history;
pub mod input;
pub mod storage;
pub mod tools;

pub use board::{Board, ToolPhase};
pub use config::{BoardConfig, ConfigError, StrokeOptions};
pub use elements::{
    ApproximateTextMeasure, Element, ElementFactory, ElementId, FillPattern, FreehandElement,
    RoughDescriptor, SerializableColor, ShapeElement, ShapeKind, ShapeStyle, TextElement,
    TextMeasure,
};
pub use error::{BoardError, BoardResult};
pub use hit::HitTester;
pub use history::History;
pub use input::{BoardEvent, HistoryCommand, Modifiers};
pub use storage::{
    BoxFuture, CanvasDocument, FileStorage, MemoryStorage, Storage, StorageError, StorageResult,
};
pub use tools::{StyleSource, ToolKind, ToolStyle, Toolbox};
