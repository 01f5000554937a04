//! Route definitions for entering blank items.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::blank_items;
use crate::state::AppState;

/// Blank item routes mounted at `/blank-items`.
///
/// ```text
/// GET    /options                  -> get_options
/// POST   /drafts                   -> open_draft
/// GET    /drafts/{id}              -> get_draft
/// DELETE /drafts/{id}              -> close_draft
/// PUT    /drafts/{id}/mockup       -> select_mockup
/// PUT    /drafts/{id}/item-name    -> edit_item_name
/// PUT    /drafts/{id}/sizes        -> confirm_sizes
/// PUT    /drafts/{id}/colors       -> confirm_colors
/// PUT    /drafts/{id}/legacy       -> set_legacy_fields
/// POST   /drafts/{id}/submit       -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/options", get(blank_items::get_options))
        .route("/drafts", post(blank_items::open_draft))
        .route(
            "/drafts/{id}",
            get(blank_items::get_draft).delete(blank_items::close_draft),
        )
        .route("/drafts/{id}/mockup", put(blank_items::select_mockup))
        .route("/drafts/{id}/item-name", put(blank_items::edit_item_name))
        .route("/drafts/{id}/sizes", put(blank_items::confirm_sizes))
        .route("/drafts/{id}/colors", put(blank_items::confirm_colors))
        .route("/drafts/{id}/legacy", put(blank_items::set_legacy_fields))
        .route("/drafts/{id}/submit", post(blank_items::submit))
}
