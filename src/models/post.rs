//! Post model and the author-name placeholder rule.

use serde::{Deserialize, Serialize};

/// Name stored for posts submitted without an author.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// A single message within a thread. Embedded in the parent thread document,
/// never persisted as a top-level entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub name: String,
    pub content: String,
    pub timestamp: String,
}

/// Request body for POST /api/savePost.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePostRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub thread_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

impl SavePostRequest {
    /// Build the post as it will be persisted, applying the author placeholder.
    pub fn into_post(self) -> Post {
        Post {
            id: self.id,
            name: normalize_author(self.name.as_deref()),
            content: self.content,
            timestamp: self.timestamp,
        }
    }
}

/// Blank or missing author names collapse to [`DEFAULT_AUTHOR`].
pub fn normalize_author(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.trim().is_empty() => n.to_string(),
        _ => DEFAULT_AUTHOR.to_string(),
    }
}

/// Request body for DELETE /api/deletePost.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    #[serde(default)]
    pub thread_id: String,
    #[serde(default)]
    pub post_id: String,
}
