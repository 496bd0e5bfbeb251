//! Post API endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{DeletePostRequest, Post, SavePostRequest};
use crate::AppState;

/// Response body for POST /api/savePost.
#[derive(Debug, Serialize)]
pub struct SavePostResponse {
    pub message: String,
    pub post: Post,
}

/// Response body for DELETE /api/deletePost.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostResponse {
    pub message: String,
    pub deleted_post: Post,
}

/// POST /api/savePost - Append a post to its thread's document.
pub async fn save_post(
    State(state): State<AppState>,
    Json(request): Json<SavePostRequest>,
) -> Result<(StatusCode, Json<SavePostResponse>), AppError> {
    if request.id.trim().is_empty()
        || request.thread_id.trim().is_empty()
        || request.content.trim().is_empty()
        || request.timestamp.trim().is_empty()
    {
        return Err(AppError::Validation(
            "id, threadId, content, and timestamp are required.".to_string(),
        ));
    }

    let thread_id = request.thread_id.clone();
    let post = state.repo.add_post(&thread_id, request.into_post()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SavePostResponse {
            message: "Post Created".to_string(),
            post,
        }),
    ))
}

/// DELETE /api/deletePost - Remove one post from its thread's document.
pub async fn delete_post(
    State(state): State<AppState>,
    Json(request): Json<DeletePostRequest>,
) -> Result<Json<DeletePostResponse>, AppError> {
    if request.thread_id.trim().is_empty() || request.post_id.trim().is_empty() {
        return Err(AppError::Validation(
            "threadId and postId are required.".to_string(),
        ));
    }

    let deleted = state
        .repo
        .remove_post(&request.thread_id, &request.post_id)
        .await?;

    Ok(Json(DeletePostResponse {
        message: "Post Deleted".to_string(),
        deleted_post: deleted,
    }))
}
