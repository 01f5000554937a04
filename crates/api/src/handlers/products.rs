//! Handlers for reading saved products.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use prodgen_core::error::CoreError;
use prodgen_core::types::DbId;
use prodgen_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: product }))
}
