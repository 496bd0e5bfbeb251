//! Thread API endpoints.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{DeleteThreadRequest, SaveThreadRequest, Thread};
use crate::AppState;

/// Response body for GET /api/getThreads.
#[derive(Debug, Serialize)]
pub struct ThreadsResponse {
    pub threads: Vec<Thread>,
}

/// Response body for POST /api/saveThread.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveThreadResponse {
    pub message: String,
    pub thread_id: String,
}

/// Response body for DELETE /api/deleteThread.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThreadResponse {
    pub message: String,
    pub deleted_thread: Thread,
}

/// GET /api/getThreads - Return the full thread collection verbatim.
pub async fn get_threads(
    State(state): State<AppState>,
) -> Result<Json<ThreadsResponse>, AppError> {
    let threads = state.repo.list_threads().await?;
    Ok(Json(ThreadsResponse { threads }))
}

/// POST /api/saveThread - Create a new thread with an empty post list.
pub async fn save_thread(
    State(state): State<AppState>,
    Json(request): Json<SaveThreadRequest>,
) -> Result<(StatusCode, Json<SaveThreadResponse>), AppError> {
    if request.id.trim().is_empty()
        || request.title.trim().is_empty()
        || request.timestamp.trim().is_empty()
    {
        return Err(AppError::Validation(
            "id, title, and timestamp are required.".to_string(),
        ));
    }

    let thread = state
        .repo
        .create_thread(request.id, request.title, request.timestamp)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SaveThreadResponse {
            message: "Thread created successfully".to_string(),
            thread_id: thread.id,
        }),
    ))
}

/// DELETE /api/deleteThread - Delete a whole thread document, posts included.
pub async fn delete_thread(
    State(state): State<AppState>,
    Json(request): Json<DeleteThreadRequest>,
) -> Result<Json<DeleteThreadResponse>, AppError> {
    if request.thread_id.trim().is_empty() {
        return Err(AppError::Validation("threadId is required.".to_string()));
    }

    let deleted = state.repo.delete_thread(&request.thread_id).await?;

    Ok(Json(DeleteThreadResponse {
        message: "Thread Deleted".to_string(),
        deleted_thread: deleted,
    }))
}
