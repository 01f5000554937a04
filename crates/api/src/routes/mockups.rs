use axum::routing::get;
use axum::Router;

use crate::handlers::mockups;
use crate::state::AppState;

/// Mockup catalog routes mounted at `/mockups`.
///
/// ```text
/// GET /  -> list_mockups
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(mockups::list_mockups))
}
