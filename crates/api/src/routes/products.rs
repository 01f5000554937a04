use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Saved product routes mounted at `/products`.
///
/// ```text
/// GET /{id}  -> get_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", get(products::get_product))
}
