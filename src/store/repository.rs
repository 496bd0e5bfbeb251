//! Domain operations over the thread store.
//!
//! Each mutating operation is one read-modify-write or read/delete cycle
//! against the store. The cycles are not transactional: concurrent writers to
//! the same thread document race and the later whole-document write wins.

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Post, Thread};

use super::ThreadStore;

/// Repository for all thread and post operations.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn ThreadStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn ThreadStore>) -> Self {
        Self { store }
    }

    /// List all threads.
    pub async fn list_threads(&self) -> Result<Vec<Thread>, AppError> {
        self.store.list().await
    }

    /// Create a new thread with an empty post list.
    ///
    /// No idempotency: duplicate submissions under the same id overwrite, and
    /// under fresh ids create duplicate threads.
    pub async fn create_thread(
        &self,
        id: String,
        title: String,
        timestamp: String,
    ) -> Result<Thread, AppError> {
        let thread = Thread::new(id, title, timestamp);
        self.store.put(&thread).await?;
        tracing::debug!("Thread created: {}", thread.id);
        Ok(thread)
    }

    /// Append a post to a thread, rewriting the whole document.
    pub async fn add_post(&self, thread_id: &str, post: Post) -> Result<Post, AppError> {
        let mut thread = self
            .store
            .get(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Thread {} not found", thread_id)))?;

        thread.posts.push(post.clone());
        self.store.put(&thread).await?;
        tracing::debug!("Post {} added to thread {}", post.id, thread_id);
        Ok(post)
    }

    /// Remove one post from a thread, rewriting the whole document. Returns
    /// the removed post.
    pub async fn remove_post(&self, thread_id: &str, post_id: &str) -> Result<Post, AppError> {
        let mut thread = self
            .store
            .get(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Thread {} not found", thread_id)))?;

        let index = thread
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Post {} not found in thread {}",
                    post_id, thread_id
                ))
            })?;

        let removed = thread.posts.remove(index);
        self.store.put(&thread).await?;
        tracing::debug!("Post {} removed from thread {}", post_id, thread_id);
        Ok(removed)
    }

    /// Delete a whole thread, cascading to its embedded posts. Returns the
    /// prior content.
    pub async fn delete_thread(&self, thread_id: &str) -> Result<Thread, AppError> {
        let thread = self
            .store
            .get(thread_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Thread {} not found", thread_id)))?;

        self.store.delete(thread_id).await?;
        tracing::debug!(
            "Thread {} deleted with {} posts",
            thread_id,
            thread.posts.len()
        );
        Ok(thread)
    }
}
