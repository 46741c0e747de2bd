use crate::models::{Ad, AdStatus};
use crate::store::{AdStore, PriceFilter, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

// In-memory stand-in for the Postgres store. One lock over the whole map
// gives the same per-document atomicity the engine expects.
#[derive(Default)]
pub struct MemoryAdStore {
	ads: RwLock<HashMap<Uuid, Ad>>,
}

impl MemoryAdStore {
	pub fn new() -> Self {
		MemoryAdStore::default()
	}
}

#[async_trait]
impl AdStore for MemoryAdStore {
	async fn insert(&self, ad: &Ad) -> Result<(), StoreError> {
		self.ads.write().await.insert(ad.id, ad.clone());
		Ok(())
	}

	async fn save(&self, ad: &Ad) -> Result<(), StoreError> {
		self.ads.write().await.insert(ad.id, ad.clone());
		Ok(())
	}

	async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, StoreError> {
		Ok(self.ads.read().await.get(&id).cloned())
	}

	async fn list_active(&self) -> Result<Vec<Ad>, StoreError> {
		let mut ads: Vec<Ad> = self
			.ads
			.read()
			.await
			.values()
			.filter(|ad| ad.status == AdStatus::Active)
			.cloned()
			.collect();
		ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
		Ok(ads)
	}

	async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Ad>, StoreError> {
		let mut ads: Vec<Ad> = self
			.ads
			.read()
			.await
			.values()
			.filter(|ad| ad.owner == owner)
			.cloned()
			.collect();
		ads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
		Ok(ads)
	}

	async fn count_active_by_owner(&self, owner: Uuid) -> Result<i64, StoreError> {
		let count = self
			.ads
			.read()
			.await
			.values()
			.filter(|ad| ad.owner == owner && ad.status == AdStatus::Active)
			.count();
		Ok(count as i64)
	}

	async fn average_price_uah(&self, filter: &PriceFilter) -> Result<Option<f64>, StoreError> {
		let ads = self.ads.read().await;
		let prices: Vec<f64> = ads
			.values()
			.filter(|ad| {
				ad.status == AdStatus::Active
					&& ad.make == filter.make
					&& ad.model == filter.model
					&& filter
						.region
						.as_ref()
						.map(|region| &ad.region == region)
						.unwrap_or(true)
			})
			.map(|ad| ad.price_uah)
			.collect();

		if prices.is_empty() {
			Ok(None)
		} else {
			Ok(Some(prices.iter().sum::<f64>() / prices.len() as f64))
		}
	}
}
