//! In-memory storage.

use super::{BoxFuture, CanvasDocument, Storage, StorageError, StorageResult};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Keeps documents as serialized JSON, so a load rebuilds render data exactly
/// as it would from a file.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: RwLock<HashMap<String, String>>,
}

fn lock_error<T>(e: PoisonError<T>) -> StorageError {
    StorageError::Other(format!("Lock error: {}", e))
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, HashMap<String, String>>> {
        self.documents.read().map_err(lock_error)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.documents.write().map_err(lock_error)
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, document: &CanvasDocument) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let json = document.to_json();
        Box::pin(async move {
            let json = json.map_err(|e| StorageError::Serialization(e.to_string()))?;
            log::debug!("Saving {} bytes to memory document {}", json.len(), id);
            self.write()?.insert(id, json);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<CanvasDocument>> {
        let id = id.to_string();
        Box::pin(async move {
            let docs = self.read()?;
            let json = docs.get(&id).ok_or_else(|| StorageError::NotFound(id.clone()))?;
            CanvasDocument::from_json(json)
                .map_err(|e| StorageError::Serialization(format!("Failed to parse {}: {}", id, e)))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            self.write()?.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let mut ids: Vec<String> = self.read()?.keys().cloned().collect();
            ids.sort();
            Ok(ids)
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move { Ok(self.read()?.contains_key(&id)) })
    }
}
