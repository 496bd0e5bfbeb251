//! Seat grid page.

use std::collections::HashSet;

use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::grid::{self, Seat};
use crate::models::SeatStatus;
use crate::AppState;

use super::{escape, include_res};

/// GET /seating - Render the seat grid.
///
/// Occupied seats are inert; every other seat links to its board. A seat
/// whose board already has a thread links with the focus flag so the
/// destination opens ready for input.
pub async fn seating(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let visited: HashSet<String> = match state.repo.list_threads().await {
        Ok(threads) => threads.into_iter().map(|t| t.title).collect(),
        Err(e) => {
            // The grid stays usable without the focus hints.
            tracing::error!("Failed to fetch threads for the seating page: {}", e);
            HashSet::new()
        }
    };

    let grid = grid::generate(
        state.config.grid_rows,
        state.config.grid_cols,
        &state.config.grid_prefix,
    );

    let mut rows = String::new();
    for row in &grid {
        rows.push_str("<div class=\"row\">");
        for seat in row {
            let status = state.seats.status_of(&seat.number);
            rows.push_str(&render_seat(seat, status, visited.contains(&seat.number)));
        }
        rows.push_str("</div>\n");
    }

    Ok(Html(include_res!("/pages/seating.html").replace("{rows}", &rows)))
}

fn render_seat(seat: &Seat, status: SeatStatus, visited: bool) -> String {
    let label = escape(&seat.display_name);
    match status {
        SeatStatus::Occupied => {
            format!("<span class=\"seat occupied\">{}</span>", label)
        }
        _ => {
            let mut href = format!("/board?seat={}", seat.number);
            if visited {
                href.push_str("&focus=newPost");
            }
            format!(
                "<a class=\"seat {}\" href=\"{}\">{}</a>",
                status.as_str(),
                escape(&href),
                label
            )
        }
    }
}
