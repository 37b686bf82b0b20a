//! Board Route
//!
//! - GET / - The board, rendered on the server after one feed load

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::board::render_page;

/// GET /
///
/// Always 200: a failed load is a rendered error state, not an HTTP error.
pub async fn board_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let load_state = state.source.load_state().await;
    Html(render_page(&load_state))
}
