//! HTTP backend forwarding to the external blob store.
//!
//! Documents live under `{base}/threads/{id}`; the collection is listed at
//! `{base}/threads`. Upstream failures are reported verbatim in the error
//! detail. No retries and no timeouts beyond the client defaults.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::ThreadStore;
use crate::errors::AppError;
use crate::models::Thread;

/// Forwarding client for the external blob store.
pub struct HttpThreadStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpThreadStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/threads", self.base_url)
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/threads/{}", self.base_url, id)
    }

    /// Turn a non-success upstream response into an error carrying the
    /// upstream status and body.
    async fn upstream_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AppError::Upstream(format!("Store returned {}: {}", status, body))
    }
}

#[async_trait]
impl ThreadStore for HttpThreadStore {
    async fn list(&self) -> Result<Vec<Thread>, AppError> {
        let response = self.client.get(self.collection_url()).send().await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Option<Thread>, AppError> {
        let response = self.client.get(self.document_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        Ok(Some(response.json().await?))
    }

    async fn put(&self, thread: &Thread) -> Result<(), AppError> {
        let response = self
            .client
            .put(self.document_url(&thread.id))
            .json(thread)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let response = self.client.delete(self.document_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Thread {} not found", id)));
        }
        if !response.status().is_success() {
            return Err(Self::upstream_error(response).await);
        }

        Ok(())
    }
}
