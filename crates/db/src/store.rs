//! [`ProductStore`] backed by PostgreSQL.

use async_trait::async_trait;
use prodgen_core::error::CoreError;
use prodgen_core::submission::{PersistRecord, ProductStore};
use prodgen_core::types::DbId;

use crate::repositories::ProductRepo;
use crate::DbPool;

/// Saves assembled products into the `products` table.
#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn add_product(&self, record: &PersistRecord) -> Result<Option<DbId>, CoreError> {
        let id = ProductRepo::create(&self.pool, record).await.map_err(|e| {
            tracing::error!(error = %e, item_sku = %record.item_sku, "Product insert failed");
            CoreError::Upstream(e.to_string())
        })?;

        tracing::debug!(product_id = id, item_sku = %record.item_sku, "Product inserted");
        Ok(Some(id))
    }
}
