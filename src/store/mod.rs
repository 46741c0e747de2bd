pub mod postgres;

#[cfg(test)]
pub mod memory;

use crate::models::{Ad, ApiError};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<StoreError> for ApiError {
	fn from(err: StoreError) -> Self {
		ApiError::InternalServerError(err.to_string())
	}
}

// Filter for the average-price aggregate. `region: None` widens the match to
// the whole country. Only ACTIVE ads are counted.
#[derive(Debug, Clone)]
pub struct PriceFilter {
	pub make: String,
	pub model: String,
	pub region: Option<String>,
}

// Document-store contract for ad records: atomic per-document reads and
// writes plus the aggregate the statistics need. Last writer wins on
// concurrent saves of the same ad.
#[async_trait]
pub trait AdStore: Send + Sync {
	async fn insert(&self, ad: &Ad) -> Result<(), StoreError>;
	async fn save(&self, ad: &Ad) -> Result<(), StoreError>;
	async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, StoreError>;
	async fn list_active(&self) -> Result<Vec<Ad>, StoreError>;
	async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Ad>, StoreError>;
	async fn count_active_by_owner(&self, owner: Uuid) -> Result<i64, StoreError>;
	async fn average_price_uah(&self, filter: &PriceFilter) -> Result<Option<f64>, StoreError>;
}
