//! Thread persistence.
//!
//! The external blob store holds one JSON document per thread, keyed by the
//! thread id. [`ThreadStore`] is the port; the HTTP backend forwards to the
//! configured store and the in-memory backend is a test double and
//! development fallback. All domain operations go through [`Repository`].

mod http;
mod memory;
mod repository;

pub use http::HttpThreadStore;
pub use memory::MemoryThreadStore;
pub use repository::Repository;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::Thread;

/// Blob-level persistence contract for thread documents.
///
/// `put` is a whole-document overwrite: the read-modify-write cycles built on
/// top of it are not transactional, and concurrent writers to the same
/// document race with last-write-wins semantics.
#[async_trait]
pub trait ThreadStore: Send + Sync {
    /// Read the full collection.
    async fn list(&self) -> Result<Vec<Thread>, AppError>;

    /// Read one document, or None if absent.
    async fn get(&self, id: &str) -> Result<Option<Thread>, AppError>;

    /// Write a document, replacing any previous content.
    async fn put(&self, thread: &Thread) -> Result<(), AppError>;

    /// Remove a document.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Select the store backend from configuration.
pub fn from_config(config: &Config) -> Arc<dyn ThreadStore> {
    match &config.store_url {
        Some(url) => {
            tracing::info!("Using external blob store at {}", url);
            Arc::new(HttpThreadStore::new(url.clone()))
        }
        None => {
            tracing::warn!(
                "No SEATBOARD_STORE_URL configured; using the in-memory store. \
                 Threads will not survive a restart."
            );
            Arc::new(MemoryThreadStore::new())
        }
    }
}
