//! Turning a draft into a persisted product.
//!
//! [`assemble_and_validate`] is pure: it builds the [`PersistRecord`] and
//! checks required fields. [`submit_draft`] adds the single call to the
//! [`ProductStore`]; it never retries and never touches the draft on failure.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::draft::DraftProduct;
use crate::error::CoreError;
use crate::mockup::MockupCatalog;
use crate::sku::generate_product_sku;
use crate::types::DbId;

/// Every blank item is stored as a parent product.
pub const PARENT_CHILD_PARENT: &str = "Parent";

/// Field label reported when the item name or SKU is missing.
pub const FIELD_NAME_AND_SKU: &str = "Item Name and SKU";

/// Field label reported when no mockup is selected.
pub const FIELD_MOCKUP: &str = "mockup selection";

/// The row handed to the product store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistRecord {
    pub product_name: String,
    pub item_sku: String,
    pub parent_child: String,
    pub parent_sku: Option<String>,
    /// JSON-encoded size entries, or the legacy free-text size.
    pub size: Option<String>,
    /// JSON-encoded color hexes, or the legacy free-text color.
    pub color: Option<String>,
    pub mockup_id: String,
    pub image_url: Option<String>,
    pub marketplace_title: Option<String>,
    pub category: String,
    pub tax_class: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub smart_object_uuid: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("Failed to save product: {0}")]
    Persistence(String),

    #[error("Database returned no product ID.")]
    NoProductId,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Persistence for assembled products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Store a product. `Ok(None)` means the store accepted the call but
    /// produced no identifier.
    async fn add_product(&self, record: &PersistRecord) -> Result<Option<DbId>, CoreError>;
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub product_id: DbId,
    pub record: PersistRecord,
    /// The draft to continue with (always empty).
    pub draft: DraftProduct,
}

/// Check the fields a draft needs before it can be saved.
///
/// Needs no catalog, so callers can reject an incomplete draft before
/// fetching one.
pub fn validate_required(draft: &DraftProduct) -> Result<(), SubmissionError> {
    if draft.item_name.is_empty() || effective_sku(draft).is_empty() {
        return Err(SubmissionError::MissingRequiredField(FIELD_NAME_AND_SKU));
    }
    if draft.mockup_id.is_empty() {
        return Err(SubmissionError::MissingRequiredField(FIELD_MOCKUP));
    }
    Ok(())
}

/// Build the record for `draft` and check its required fields.
pub fn assemble_and_validate(
    draft: &DraftProduct,
    catalog: &MockupCatalog,
) -> Result<PersistRecord, SubmissionError> {
    validate_required(draft)?;

    let item_sku = effective_sku(draft);
    let smart_object_uuid = catalog
        .smart_object_uuid(&draft.mockup_id, &draft.item_name)
        .map(str::to_string);

    let size = if draft.sizes.is_empty() {
        draft.size_name.clone()
    } else {
        Some(to_json(&draft.sizes)?)
    };
    let color = if draft.colors.is_empty() {
        draft.color_name.clone()
    } else {
        Some(to_json(&draft.colors)?)
    };

    Ok(PersistRecord {
        product_name: draft.item_name.clone(),
        item_sku,
        parent_child: PARENT_CHILD_PARENT.to_string(),
        parent_sku: None,
        size,
        color,
        mockup_id: draft.mockup_id.clone(),
        image_url: None,
        marketplace_title: None,
        category: draft.selected_mockup.clone(),
        tax_class: None,
        quantity: 0,
        price: 0.0,
        smart_object_uuid,
    })
}

/// Assemble, validate and store `draft`.
///
/// On success the returned outcome carries an empty draft. On any error the
/// caller's draft is still valid for resubmission.
pub async fn submit_draft(
    draft: &DraftProduct,
    catalog: &MockupCatalog,
    store: &dyn ProductStore,
) -> Result<SubmitOutcome, SubmissionError> {
    let record = assemble_and_validate(draft, catalog)?;

    match store.add_product(&record).await {
        Ok(Some(product_id)) => Ok(SubmitOutcome {
            product_id,
            record,
            draft: draft.clone().reset(),
        }),
        Ok(None) => Err(SubmissionError::NoProductId),
        Err(e) => Err(SubmissionError::Persistence(e.to_string())),
    }
}

/// The draft's SKU, or a freshly generated one when the draft has none.
fn effective_sku(draft: &DraftProduct) -> String {
    if draft.sku.is_empty() {
        generate_product_sku(&draft.item_name, &draft.colors, &draft.sizes)
    } else {
        draft.sku.clone()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string(value).map_err(|e| CoreError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;

    use super::*;
    use crate::mockup::{RawMockup, RawSmartObject};
    use crate::size::SizeName;

    fn catalog() -> MockupCatalog {
        MockupCatalog::from_raw(&[RawMockup {
            id: Some("m1".into()),
            uuid: None,
            smart_objects: vec![
                RawSmartObject {
                    name: Some("Front".into()),
                    uuid: Some("so-front".into()),
                },
                RawSmartObject {
                    name: Some("Back".into()),
                    uuid: Some("so-back".into()),
                },
            ],
        }])
    }

    fn ready_draft() -> DraftProduct {
        DraftProduct::default().select_mockup("Front, Back", &catalog())
    }

    /// Store that records calls and answers with a fixed result.
    struct FakeStore {
        calls: AtomicUsize,
        answer: fn() -> Result<Option<DbId>, CoreError>,
    }

    impl FakeStore {
        fn new(answer: fn() -> Result<Option<DbId>, CoreError>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                answer,
            }
        }
    }

    #[async_trait]
    impl ProductStore for FakeStore {
        async fn add_product(&self, _record: &PersistRecord) -> Result<Option<DbId>, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            (self.answer)()
        }
    }

    #[test]
    fn record_fields_for_complete_draft() {
        let draft = ready_draft();
        let record = assemble_and_validate(&draft, &catalog()).unwrap();
        assert_eq!(record.product_name, "Front");
        assert_eq!(record.item_sku, draft.sku);
        assert_eq!(record.parent_child, "Parent");
        assert_eq!(record.parent_sku, None);
        assert_eq!(record.mockup_id, "m1");
        assert_eq!(record.category, "Front, Back");
        assert_eq!(record.quantity, 0);
        assert_eq!(record.price, 0.0);
        assert_eq!(record.smart_object_uuid.as_deref(), Some("so-front"));
        assert_eq!(record.size, None);
        assert_eq!(record.color, None);
    }

    #[test]
    fn sizes_and_colors_are_json_encoded() {
        let draft = ready_draft()
            .confirm_sizes(&[SizeName::Small])
            .confirm_colors(&["Navy"]);
        let record = assemble_and_validate(&draft, &catalog()).unwrap();

        let sizes: serde_json::Value = serde_json::from_str(record.size.as_deref().unwrap()).unwrap();
        assert_eq!(sizes[0]["name"], "Small");
        assert_eq!(sizes[0]["sku"], draft.sizes[0].sku.as_str());
        assert_eq!(record.color.as_deref(), Some(r##"["#000080"]"##));
    }

    #[test]
    fn legacy_fields_used_when_lists_empty() {
        let draft = ready_draft().set_legacy_fields(Some("One Size".into()), Some("Natural".into()));
        let record = assemble_and_validate(&draft, &catalog()).unwrap();
        assert_eq!(record.size.as_deref(), Some("One Size"));
        assert_eq!(record.color.as_deref(), Some("Natural"));
    }

    #[test]
    fn missing_sku_is_generated_inline() {
        let mut draft = ready_draft();
        draft.sku.clear();
        let record = assemble_and_validate(&draft, &catalog()).unwrap();
        assert!(record.item_sku.starts_with("FRO-"), "got {}", record.item_sku);
    }

    #[test]
    fn renamed_item_has_no_smart_object_uuid() {
        let draft = ready_draft().edit_item_name("Tote");
        let record = assemble_and_validate(&draft, &catalog()).unwrap();
        assert_eq!(record.smart_object_uuid, None);
        assert_eq!(record.mockup_id, "m1");
    }

    #[test]
    fn second_smart_object_name_resolves_its_uuid() {
        let draft = ready_draft().edit_item_name("Back");
        let record = assemble_and_validate(&draft, &catalog()).unwrap();
        assert_eq!(record.smart_object_uuid.as_deref(), Some("so-back"));
    }

    #[test]
    fn unnamed_smart_object_gives_no_uuid() {
        let catalog = MockupCatalog::from_raw(&[RawMockup {
            id: Some("m2".into()),
            uuid: None,
            smart_objects: vec![RawSmartObject {
                name: None,
                uuid: Some("so-anon".into()),
            }],
        }]);
        let draft = DraftProduct::default().select_mockup("Unnamed", &catalog);
        assert_eq!(draft.item_name, "Unnamed");
        let record = assemble_and_validate(&draft, &catalog).unwrap();
        assert_eq!(record.mockup_id, "m2");
        assert_eq!(record.smart_object_uuid, None);
    }

    #[test]
    fn empty_name_is_rejected_first() {
        let err = assemble_and_validate(&DraftProduct::default(), &catalog()).unwrap_err();
        assert_matches!(err, SubmissionError::MissingRequiredField(FIELD_NAME_AND_SKU));
    }

    #[test]
    fn missing_mockup_is_rejected() {
        let draft = DraftProduct::default().edit_item_name("Tote");
        let err = assemble_and_validate(&draft, &catalog()).unwrap_err();
        assert_matches!(err, SubmissionError::MissingRequiredField(FIELD_MOCKUP));
    }

    #[test]
    fn required_fields_checked_without_catalog() {
        assert_matches!(
            validate_required(&DraftProduct::default()),
            Err(SubmissionError::MissingRequiredField(FIELD_NAME_AND_SKU))
        );
        assert_matches!(
            validate_required(&DraftProduct::default().edit_item_name("Tote")),
            Err(SubmissionError::MissingRequiredField(FIELD_MOCKUP))
        );
        assert_matches!(validate_required(&ready_draft()), Ok(()));
    }

    #[test]
    fn empty_sku_with_name_passes_validation() {
        let mut draft = ready_draft();
        draft.sku.clear();
        assert_matches!(validate_required(&draft), Ok(()));
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_store() {
        let store = FakeStore::new(|| Ok(Some(1)));
        let draft = DraftProduct::default().edit_item_name("");
        let err = submit_draft(&draft, &catalog(), &store).await.unwrap_err();
        assert_matches!(err, SubmissionError::MissingRequiredField(_));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_save_resets_draft() {
        let store = FakeStore::new(|| Ok(Some(42)));
        let draft = ready_draft()
            .confirm_sizes(&[SizeName::Small, SizeName::Large])
            .confirm_colors(&["Red"]);
        let outcome = submit_draft(&draft, &catalog(), &store).await.unwrap();
        assert_eq!(outcome.product_id, 42);
        assert!(outcome.draft.sizes.is_empty());
        assert!(outcome.draft.colors.is_empty());
        assert_eq!(outcome.draft, DraftProduct::default());
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_identifier_is_reported_separately() {
        let store = FakeStore::new(|| Ok(None));
        let err = submit_draft(&ready_draft(), &catalog(), &store)
            .await
            .unwrap_err();
        assert_matches!(err, SubmissionError::NoProductId);
        assert_eq!(err.to_string(), "Database returned no product ID.");
    }

    #[tokio::test]
    async fn store_failure_carries_underlying_text() {
        let store = FakeStore::new(|| Err(CoreError::Upstream("connection refused".into())));
        let err = submit_draft(&ready_draft(), &catalog(), &store)
            .await
            .unwrap_err();
        assert_matches!(err, SubmissionError::Persistence(msg) if msg.contains("connection refused"));
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }
}
