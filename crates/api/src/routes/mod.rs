pub mod blank_items;
pub mod health;
pub mod mockups;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /mockups                                  mockup catalog
///
/// /blank-items/options                      sizes and colors on offer
/// /blank-items/drafts                       open a draft session (POST)
/// /blank-items/drafts/{id}                  get, discard
/// /blank-items/drafts/{id}/mockup           select mockup (PUT)
/// /blank-items/drafts/{id}/item-name        edit item name (PUT)
/// /blank-items/drafts/{id}/sizes            confirm sizes (PUT)
/// /blank-items/drafts/{id}/colors           confirm colors (PUT)
/// /blank-items/drafts/{id}/legacy           legacy size/color text (PUT)
/// /blank-items/drafts/{id}/submit           save (POST)
///
/// /products/{id}                            saved product
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/mockups", mockups::router())
        .nest("/blank-items", blank_items::router())
        .nest("/products", products::router())
}
