//! Board page and its form actions.
//!
//! The board is rendered from a fresh thread list on every request; each form
//! action runs its store operation and redirects back, so the page never
//! carries stale client state. Failures surface uniformly as a non-blocking
//! notice banner on the redirect.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{normalize_author, Post, Thread};
use crate::AppState;

use super::{escape, include_res};

/// Query parameters accepted by the board page.
#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    #[serde(default)]
    seat: String,
    focus: Option<String>,
    notice: Option<String>,
}

/// GET /board - Render the board for a seat.
pub async fn board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, AppError> {
    let threads = match state.repo.list_threads().await {
        Ok(threads) => threads,
        Err(e) => {
            // A failed fetch renders an empty board; mutations report their
            // own failures through the redirect notice.
            tracing::error!("Failed to fetch threads for the board page: {}", e);
            Vec::new()
        }
    };

    let focus_new_post = query.focus.as_deref() == Some("newPost");
    let focused_thread = if focus_new_post {
        threads
            .iter()
            .find(|t| t.title == query.seat)
            .map(|t| t.id.clone())
    } else {
        None
    };

    let mut rendered = String::new();
    for thread in &threads {
        let focused = focused_thread.as_deref() == Some(thread.id.as_str());
        rendered.push_str(&render_thread(thread, &query.seat, focused));
    }

    let notice = match &query.notice {
        Some(code) => include_res!("/pages/notice.html").replace("{notice}", notice_text(code)),
        None => String::new(),
    };

    // Focus falls back to the title input when the seat has no thread yet.
    let title_focus = focus_new_post && focused_thread.is_none();

    let body = include_res!("/pages/board.html")
        .replace("{notice}", &notice)
        .replace("{title_focus}", if title_focus { " autofocus" } else { "" })
        .replace("{seat}", &escape(&query.seat))
        .replace("{title}", &escape(&query.seat))
        .replace("{threads}", &rendered);

    Ok(Html(body))
}

/// One thread with its posts, post form, and delete control.
fn render_thread(thread: &Thread, seat: &str, focus_post_form: bool) -> String {
    let posts = if thread.posts.is_empty() {
        "<p class=\"empty\">No posts yet.</p>".to_string()
    } else {
        thread
            .posts
            .iter()
            .enumerate()
            .map(|(i, post)| render_post(post, i + 1, seat, &thread.id))
            .collect()
    };

    include_res!("/pages/thread.html")
        .replace("{thread_id}", &escape(&thread.id))
        .replace("{seat}", &escape(seat))
        .replace("{focus}", if focus_post_form { " autofocus" } else { "" })
        .replace("{title}", &escape(&thread.title))
        .replace("{posts}", &posts)
}

fn render_post(post: &Post, number: usize, seat: &str, thread_id: &str) -> String {
    include_res!("/pages/post.html")
        .replace("{number}", &number.to_string())
        .replace("{seat}", &escape(seat))
        .replace("{thread_id}", &escape(thread_id))
        .replace("{post_id}", &escape(&post.id))
        .replace("{timestamp}", &escape(&post.timestamp))
        .replace("{name}", &escape(&post.name))
        .replace("{content}", &escape(&post.content))
}

fn notice_text(code: &str) -> &'static str {
    match code {
        "thread-create-failed" => "Could not create the thread. Please try again.",
        "post-create-failed" => "Could not save the post. Please try again.",
        "thread-delete-failed" => "Could not delete the thread. Please try again.",
        "post-delete-failed" => "Could not delete the post. Please try again.",
        "not-found" => "That thread or post no longer exists.",
        _ => "The last operation failed.",
    }
}

/// Redirect back to the board, optionally carrying a notice code.
fn back(seat: &str, notice: Option<&str>) -> Redirect {
    // Seat ids are alphanumeric with dashes; strip anything else before it
    // reaches the Location header.
    let seat: String = seat
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    let mut target = format!("/board?seat={}", seat);
    if let Some(code) = notice {
        target.push_str("&notice=");
        target.push_str(code);
    }
    Redirect::to(&target)
}

/// Form body for creating a thread.
#[derive(Debug, Deserialize)]
pub struct NewThreadForm {
    #[serde(default)]
    seat: String,
    #[serde(default)]
    title: String,
}

/// POST /board/threads - Create a thread from the board form.
pub async fn create_thread(
    State(state): State<AppState>,
    Form(form): Form<NewThreadForm>,
) -> Redirect {
    // Empty or whitespace-only titles are a no-op: no store operation issued.
    if form.title.trim().is_empty() {
        return back(&form.seat, None);
    }

    let id = Uuid::new_v4().to_string();
    let timestamp = Utc::now().to_rfc3339();

    match state.repo.create_thread(id, form.title, timestamp).await {
        Ok(_) => back(&form.seat, None),
        Err(e) => {
            tracing::error!("Failed to create thread: {}", e);
            back(&form.seat, Some("thread-create-failed"))
        }
    }
}

/// Form body for adding a post.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostForm {
    #[serde(default)]
    seat: String,
    #[serde(default)]
    thread_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// POST /board/posts - Add a post from a thread's form.
pub async fn create_post(
    State(state): State<AppState>,
    Form(form): Form<NewPostForm>,
) -> Redirect {
    // Empty messages and missing thread targets are a no-op.
    if form.message.trim().is_empty() || form.thread_id.trim().is_empty() {
        return back(&form.seat, None);
    }

    let post = Post {
        id: Uuid::new_v4().to_string(),
        name: normalize_author(Some(&form.name)),
        content: form.message,
        timestamp: Utc::now().to_rfc3339(),
    };

    match state.repo.add_post(&form.thread_id, post).await {
        Ok(_) => back(&form.seat, None),
        Err(AppError::NotFound(e)) => {
            tracing::warn!("Post target vanished: {}", e);
            back(&form.seat, Some("not-found"))
        }
        Err(e) => {
            tracing::error!("Failed to save post: {}", e);
            back(&form.seat, Some("post-create-failed"))
        }
    }
}

/// Form body for deleting a thread.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteThreadForm {
    #[serde(default)]
    seat: String,
    #[serde(default)]
    thread_id: String,
}

/// POST /board/threads/delete - Delete a thread and all of its posts.
pub async fn delete_thread(
    State(state): State<AppState>,
    Form(form): Form<DeleteThreadForm>,
) -> Redirect {
    match state.repo.delete_thread(&form.thread_id).await {
        Ok(_) => back(&form.seat, None),
        Err(AppError::NotFound(e)) => {
            tracing::warn!("Thread already gone: {}", e);
            back(&form.seat, Some("not-found"))
        }
        Err(e) => {
            tracing::error!("Failed to delete thread: {}", e);
            back(&form.seat, Some("thread-delete-failed"))
        }
    }
}

/// Form body for deleting a post.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostForm {
    #[serde(default)]
    seat: String,
    #[serde(default)]
    thread_id: String,
    #[serde(default)]
    post_id: String,
}

/// POST /board/posts/delete - Delete one post.
pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeletePostForm>,
) -> Redirect {
    match state.repo.remove_post(&form.thread_id, &form.post_id).await {
        Ok(_) => back(&form.seat, None),
        Err(AppError::NotFound(e)) => {
            tracing::warn!("Post already gone: {}", e);
            back(&form.seat, Some("not-found"))
        }
        Err(e) => {
            tracing::error!("Failed to delete post: {}", e);
            back(&form.seat, Some("post-delete-failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread_with_post() -> Thread {
        Thread {
            id: "t1".to_string(),
            title: "A1-1".to_string(),
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            posts: vec![Post {
                id: "p1".to_string(),
                name: "alice".to_string(),
                content: "hello".to_string(),
                timestamp: "2024-01-01T00:01:00Z".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_thread_escapes_user_content() {
        let mut thread = thread_with_post();
        thread.title = "<b>bold</b>".to_string();
        thread.posts[0].content = "<script>alert(1)</script>".to_string();

        let html = render_thread(&thread, "A1-1", false);
        assert!(!html.contains("<b>bold</b>"));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_render_thread_focus_flag() {
        let thread = thread_with_post();
        assert!(render_thread(&thread, "A1-1", true).contains(" autofocus"));
        assert!(!render_thread(&thread, "A1-1", false).contains(" autofocus"));
    }

    #[test]
    fn test_render_post_numbering() {
        let thread = thread_with_post();
        let html = render_post(&thread.posts[0], 1, "A1-1", "t1");
        assert!(html.contains("No.1"));
        assert!(html.contains("alice"));
    }
}
