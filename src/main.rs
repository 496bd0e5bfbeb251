//! Seatboard backend
//!
//! A seat-selection grid paired with a per-seat message board, persisted in
//! an external blob store behind a thin forwarding layer.

mod api;
mod config;
mod errors;
mod grid;
mod models;
mod store;
mod views;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use models::SeatMap;
use store::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub seats: Arc<SeatMap>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Seatboard");
    tracing::info!("Seat status file: {:?}", config.seats_path);
    tracing::info!(
        "Grid: {}x{} with prefix {:?}",
        config.grid_rows,
        config.grid_cols,
        config.grid_prefix
    );
    tracing::info!("Bind address: {}", config.bind_addr);

    // Seat statuses are read once at startup
    let seats = Arc::new(SeatMap::load(&config.seats_path));
    tracing::info!("Loaded {} seat status records", seats.len());

    // Select the store backend and wrap it in the repository
    let store = store::from_config(&config);
    let repo = Repository::new(store);

    let state = AppState {
        repo,
        seats,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Forwarding endpoints, each gated to exactly one method
    let api_routes = Router::new()
        .route(
            "/api/getThreads",
            api::method_gated(get(api::get_threads), &["GET"]),
        )
        .route(
            "/api/saveThread",
            api::method_gated(post(api::save_thread), &["POST"]),
        )
        .route(
            "/api/savePost",
            api::method_gated(post(api::save_post), &["POST"]),
        )
        .route(
            "/api/deleteThread",
            api::method_gated(delete(api::delete_thread), &["DELETE"]),
        )
        .route(
            "/api/deletePost",
            api::method_gated(delete(api::delete_post), &["DELETE"]),
        );

    // Server-rendered views and their form actions
    let view_routes = Router::new()
        .route("/", get(|| async { Redirect::to("/seating") }))
        .route("/seating", get(views::seating))
        .route("/board", get(views::board))
        .route("/board/threads", post(views::create_thread))
        .route("/board/posts", post(views::create_post))
        .route("/board/threads/delete", post(views::delete_thread))
        .route("/board/posts/delete", post(views::delete_post));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(view_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
