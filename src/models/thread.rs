//! Thread model matching the persisted blob-store document layout.

use serde::{Deserialize, Serialize};

use super::Post;

/// A discussion thread. One JSON document per thread in the external store,
/// keyed by `id`, with all posts embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub title: String,
    /// Opaque creation timestamp supplied by the caller, stored verbatim.
    pub timestamp: String,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Thread {
    /// A freshly created thread starts with an empty post list.
    pub fn new(id: String, title: String, timestamp: String) -> Self {
        Self {
            id,
            title,
            timestamp,
            posts: Vec::new(),
        }
    }
}

/// Request body for POST /api/saveThread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveThreadRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Request body for DELETE /api/deleteThread.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThreadRequest {
    #[serde(default)]
    pub thread_id: String,
}
