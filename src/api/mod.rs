//! JSON forwarding API.
//!
//! The five method-gated endpoints that front the external blob store. Each
//! handler validates required fields, runs one read-modify-write or
//! read/delete cycle through the repository, and translates failures into the
//! shared error envelope.

mod posts;
mod threads;

pub use posts::*;
pub use threads::*;

use axum::routing::MethodRouter;

use crate::errors::AppError;
use crate::AppState;

/// Gate a route to its registered methods; anything else gets a 405 with the
/// allowed-methods listing in both the `Allow` header and the body.
pub fn method_gated(
    router: MethodRouter<AppState>,
    allowed: &'static [&'static str],
) -> MethodRouter<AppState> {
    router.fallback(move || async move { AppError::MethodNotAllowed(allowed) })
}
