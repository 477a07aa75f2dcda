//! Axum router configuration for family endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{add_member, get_family, remove_member};
use crate::adapters::http::state::AppState;

/// # Routes (all require authentication)
///
/// - `GET /api/familia` - Family panorama
/// - `POST /api/familia/membros` - Add a member
/// - `DELETE /api/familia/membros/:id` - Remove a member
pub fn family_routes() -> Router<AppState> {
    Router::new()
        .route("/api/familia", get(get_family))
        .route("/api/familia/membros", post(add_member))
        .route("/api/familia/membros/:id", delete(remove_member))
}
