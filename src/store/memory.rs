//! In-memory store backend.
//!
//! Test double and development fallback; nothing survives a restart.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::ThreadStore;
use crate::errors::AppError;
use crate::models::Thread;

/// Thread documents held in process memory.
#[derive(Default)]
pub struct MemoryThreadStore {
    threads: RwLock<HashMap<String, Thread>>,
}

impl MemoryThreadStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_poisoned() -> AppError {
        AppError::Internal("In-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl ThreadStore for MemoryThreadStore {
    async fn list(&self) -> Result<Vec<Thread>, AppError> {
        let threads = self.threads.read().map_err(|_| Self::lock_poisoned())?;
        let mut all: Vec<Thread> = threads.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep listings stable.
        all.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn get(&self, id: &str) -> Result<Option<Thread>, AppError> {
        let threads = self.threads.read().map_err(|_| Self::lock_poisoned())?;
        Ok(threads.get(id).cloned())
    }

    async fn put(&self, thread: &Thread) -> Result<(), AppError> {
        let mut threads = self.threads.write().map_err(|_| Self::lock_poisoned())?;
        threads.insert(thread.id.clone(), thread.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut threads = self.threads.write().map_err(|_| Self::lock_poisoned())?;
        threads
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Thread {} not found", id)))
    }
}
