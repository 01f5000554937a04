//! Handlers for browsing the mockup catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use prodgen_core::mockup::{load_catalog, MockupOption};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// The catalog as offered to the form.
#[derive(Debug, Serialize)]
pub struct MockupListing {
    /// Selection labels, led by the empty option.
    pub labels: Vec<String>,
    pub options: Vec<MockupOption>,
}

/// GET /api/v1/mockups
///
/// Fetched from the provider on every call.
pub async fn list_mockups(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let catalog = load_catalog(state.mockups.as_ref()).await?;

    tracing::debug!(count = catalog.options().len(), "Mockup catalog loaded");

    Ok(Json(DataResponse {
        data: MockupListing {
            labels: catalog
                .selection_labels()
                .into_iter()
                .map(str::to_string)
                .collect(),
            options: catalog.options().to_vec(),
        },
    }))
}
