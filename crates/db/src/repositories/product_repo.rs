//! Repository for the `products` table.

use prodgen_core::submission::PersistRecord;
use prodgen_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::Product;

/// Column list for `products` queries.
const COLUMNS: &str = "\
    id, product_name, item_sku, parent_child, parent_sku, size, color, \
    mockup_id, image_url, marketplace_title, category, tax_class, \
    quantity, price, smart_object_uuid, created_at, updated_at";

/// Provides data access for saved products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product and return its new ID.
    pub async fn create(pool: &PgPool, record: &PersistRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO products \
                 (product_name, item_sku, parent_child, parent_sku, size, color, \
                  mockup_id, image_url, marketplace_title, category, tax_class, \
                  quantity, price, smart_object_uuid) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING id",
        )
        .bind(&record.product_name)
        .bind(&record.item_sku)
        .bind(&record.parent_child)
        .bind(&record.parent_sku)
        .bind(&record.size)
        .bind(&record.color)
        .bind(&record.mockup_id)
        .bind(&record.image_url)
        .bind(&record.marketplace_title)
        .bind(&record.category)
        .bind(&record.tax_class)
        .bind(record.quantity)
        .bind(record.price)
        .bind(&record.smart_object_uuid)
        .fetch_one(pool)
        .await
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find all products sharing a SKU, newest first.
    ///
    /// SKUs are only probabilistically unique, so more than one row is possible.
    pub async fn find_by_sku(pool: &PgPool, item_sku: &str) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products WHERE item_sku = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(item_sku)
            .fetch_all(pool)
            .await
    }
}
