//! Product rows.
//!
//! Inserts go through [`prodgen_core::submission::PersistRecord`], so there
//! is no separate create DTO here.

use prodgen_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub product_name: String,
    pub item_sku: String,
    pub parent_child: String,
    pub parent_sku: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
    pub mockup_id: String,
    pub image_url: Option<String>,
    pub marketplace_title: Option<String>,
    pub category: String,
    pub tax_class: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub smart_object_uuid: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
