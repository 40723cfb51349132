//! Persistence of canvas documents.
//!
//! The board never waits on storage: a consumer takes the pending collection
//! from [`Board::take_pending_save`](crate::Board::take_pending_save), wraps it
//! in a [`CanvasDocument`] and hands it to a [`Storage`] back end.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::elements::Element;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use uuid::Uuid;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future returned by storage back ends.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A named, persisted element collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Elements in paint order.
    pub elements: Vec<Element>,
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasDocument {
    /// Create an empty document with a fresh id.
    pub fn new() -> Self {
        Self::with_elements(Vec::new())
    }

    /// Create a document with a fresh id holding `elements`.
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            elements,
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON. Render data is rebuilt for every element.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Document storage back end.
///
/// Back ends receive everything they need (directories, endpoints,
/// credentials) through their constructors.
pub trait Storage: Send + Sync {
    /// Save a document under `id`, replacing any previous version.
    fn save(&self, id: &str, document: &CanvasDocument) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a document.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<CanvasDocument>>;

    /// Delete a document. Deleting a missing document is not an error.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all document IDs.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a document exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    use std::task::{Context, Poll, Waker};

    let mut cx = Context::from_waker(Waker::noop());
    let mut f = std::pin::pin!(f);
    loop {
        if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
            return result;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::tools::{ToolKind, Toolbox};
    use kurbo::Point;

    #[test]
    fn test_new_document() {
        let doc = CanvasDocument::new();
        assert_eq!(doc.name, "Untitled");
        assert!(doc.elements.is_empty());
        assert!(Uuid::parse_str(&doc.id).is_ok());
        assert_ne!(doc.id, CanvasDocument::new().id);
    }

    #[test]
    fn test_document_json_round_trip() {
        let mut board = Board::default();
        let toolbox = Toolbox::new();
        for tool in [ToolKind::Ellipse, ToolKind::Brush] {
            board.set_tool(tool);
            board.pointer_down(Point::new(10.0, 10.0), &toolbox).unwrap();
            board.pointer_move(Point::new(60.0, 40.0), &toolbox).unwrap();
            board.pointer_up();
        }

        let doc = CanvasDocument::with_elements(board.elements().to_vec());
        let loaded = CanvasDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(loaded, doc);
    }
}
