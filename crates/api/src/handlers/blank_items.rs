//! Handlers for entering blank items.
//!
//! Each draft lives in a session opened with `POST /blank-items/drafts`.
//! Every endpoint below corresponds to one form event: it loads the draft,
//! applies one transition and stores the result.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use prodgen_core::color::{self, ColorSwatch};
use prodgen_core::draft::DraftProduct;
use prodgen_core::error::CoreError;
use prodgen_core::mockup::{load_catalog, MockupCatalog};
use prodgen_core::size::SizeName;
use prodgen_core::submission::{submit_draft, validate_required};
use prodgen_core::types::DbId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// A draft together with its session id.
#[derive(Debug, Serialize)]
pub struct DraftView {
    pub id: Uuid,
    pub draft: DraftProduct,
}

/// Values the form offers for selection.
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub sizes: Vec<SizeName>,
    pub colors: Vec<ColorSwatch>,
}

#[derive(Debug, Deserialize)]
pub struct SelectMockup {
    /// Display text of the chosen option; empty clears the selection.
    #[serde(default)]
    pub selection: String,
}

#[derive(Debug, Deserialize)]
pub struct EditItemName {
    pub item_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmSizes {
    pub sizes: Vec<SizeName>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmColors {
    /// Color names; unknown names are stored as white.
    pub colors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LegacyFields {
    pub size_name: Option<String>,
    pub color_name: Option<String>,
}

/// Result of a successful save.
#[derive(Debug, Serialize)]
pub struct SubmitResult {
    pub product_id: DbId,
    pub item_sku: String,
    /// The session's draft after the save (always empty).
    pub draft: DraftProduct,
}

fn draft_not_found(id: Uuid) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Draft",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/blank-items/options
pub async fn get_options() -> Json<DataResponse<FormOptions>> {
    Json(DataResponse {
        data: FormOptions {
            sizes: SizeName::ALL.to_vec(),
            colors: color::swatches(),
        },
    })
}

/// POST /api/v1/blank-items/drafts
pub async fn open_draft(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (id, draft) = state.drafts.open().await;

    tracing::info!(draft_id = %id, "Draft session opened");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: DraftView { id, draft },
        }),
    ))
}

/// GET /api/v1/blank-items/drafts/{id}
pub async fn get_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let draft = state.drafts.get(id).await.ok_or_else(|| draft_not_found(id))?;

    Ok(Json(DataResponse {
        data: DraftView { id, draft },
    }))
}

/// DELETE /api/v1/blank-items/drafts/{id}
pub async fn close_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    if !state.drafts.close(id).await {
        return Err(draft_not_found(id));
    }

    tracing::info!(draft_id = %id, "Draft session closed");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/blank-items/drafts/{id}/mockup
///
/// Re-derives the item name, mockup id and SKU from the new selection.
pub async fn select_mockup(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SelectMockup>,
) -> AppResult<impl IntoResponse> {
    if state.drafts.get(id).await.is_none() {
        return Err(draft_not_found(id));
    }

    // Clearing the selection needs no catalog.
    let catalog = if input.selection.is_empty() {
        MockupCatalog::default()
    } else {
        load_catalog(state.mockups.as_ref()).await?
    };
    let draft = state
        .drafts
        .apply(id, |d| d.select_mockup(&input.selection, &catalog))
        .await
        .ok_or_else(|| draft_not_found(id))?;

    tracing::info!(
        draft_id = %id,
        mockup_id = %draft.mockup_id,
        item_name = %draft.item_name,
        "Mockup selection updated",
    );

    Ok(Json(DataResponse {
        data: DraftView { id, draft },
    }))
}

/// PUT /api/v1/blank-items/drafts/{id}/item-name
pub async fn edit_item_name(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<EditItemName>,
) -> AppResult<impl IntoResponse> {
    let draft = state
        .drafts
        .apply(id, |d| d.edit_item_name(&input.item_name))
        .await
        .ok_or_else(|| draft_not_found(id))?;

    tracing::debug!(draft_id = %id, sku = %draft.sku, "Item name updated");

    Ok(Json(DataResponse {
        data: DraftView { id, draft },
    }))
}

/// PUT /api/v1/blank-items/drafts/{id}/sizes
pub async fn confirm_sizes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ConfirmSizes>,
) -> AppResult<impl IntoResponse> {
    let draft = state
        .drafts
        .apply(id, |d| d.confirm_sizes(&input.sizes))
        .await
        .ok_or_else(|| draft_not_found(id))?;

    tracing::debug!(draft_id = %id, count = draft.sizes.len(), "Sizes confirmed");

    Ok(Json(DataResponse {
        data: DraftView { id, draft },
    }))
}

/// PUT /api/v1/blank-items/drafts/{id}/colors
pub async fn confirm_colors(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<ConfirmColors>,
) -> AppResult<impl IntoResponse> {
    let draft = state
        .drafts
        .apply(id, |d| d.confirm_colors(&input.colors))
        .await
        .ok_or_else(|| draft_not_found(id))?;

    tracing::debug!(draft_id = %id, count = draft.colors.len(), "Colors confirmed");

    Ok(Json(DataResponse {
        data: DraftView { id, draft },
    }))
}

/// PUT /api/v1/blank-items/drafts/{id}/legacy
pub async fn set_legacy_fields(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<LegacyFields>,
) -> AppResult<impl IntoResponse> {
    let draft = state
        .drafts
        .apply(id, |d| d.set_legacy_fields(input.size_name, input.color_name))
        .await
        .ok_or_else(|| draft_not_found(id))?;

    Ok(Json(DataResponse {
        data: DraftView { id, draft },
    }))
}

/// POST /api/v1/blank-items/drafts/{id}/submit
///
/// Validates and saves the draft. On success the session's draft is reset;
/// on any failure it is left as it was so the operator can resubmit.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let draft = state.drafts.get(id).await.ok_or_else(|| draft_not_found(id))?;

    validate_required(&draft)
        .inspect_err(|e| tracing::warn!(draft_id = %id, error = %e, "Draft submission rejected"))?;
    let catalog = load_catalog(state.mockups.as_ref()).await?;

    let outcome = submit_draft(&draft, &catalog, state.products.as_ref())
        .await
        .inspect_err(|e| tracing::warn!(draft_id = %id, error = %e, "Draft submission rejected"))?;

    let reset = outcome.draft.clone();
    state.drafts.apply(id, move |_| reset).await;

    tracing::info!(
        draft_id = %id,
        product_id = outcome.product_id,
        item_sku = %outcome.record.item_sku,
        mockup_id = %outcome.record.mockup_id,
        "Product added",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: SubmitResult {
                product_id: outcome.product_id,
                item_sku: outcome.record.item_sku,
                draft: outcome.draft,
            },
        }),
    ))
}
