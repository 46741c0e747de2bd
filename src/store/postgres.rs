use crate::models::{Ad, AdStatus};
use crate::store::{AdStore, PriceFilter, StoreError};
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub struct PostgresAdStore {
	pool: Pool<Postgres>,
}

impl PostgresAdStore {
	pub fn new(pool: Pool<Postgres>) -> Self {
		PostgresAdStore { pool }
	}
}

#[async_trait]
impl AdStore for PostgresAdStore {
	async fn insert(&self, ad: &Ad) -> Result<(), StoreError> {
		sqlx::query(
			r#"
			INSERT INTO ads (
				id, owner, make, model, description, region,
				original_price, original_currency,
				price_usd, price_eur, price_uah, rate_source, rate_date,
				status, profanity_check_attempts,
				views_total, views_today, views_this_week, views_this_month,
				views_updated_at, created_at, updated_at
			)
			VALUES (
				$1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
				$12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22
			)
			"#,
		)
		.bind(ad.id)
		.bind(ad.owner)
		.bind(&ad.make)
		.bind(&ad.model)
		.bind(&ad.description)
		.bind(&ad.region)
		.bind(ad.original_price)
		.bind(ad.original_currency)
		.bind(ad.price_usd)
		.bind(ad.price_eur)
		.bind(ad.price_uah)
		.bind(&ad.rate_source)
		.bind(ad.rate_date)
		.bind(ad.status)
		.bind(ad.profanity_check_attempts)
		.bind(ad.views_total)
		.bind(ad.views_today)
		.bind(ad.views_this_week)
		.bind(ad.views_this_month)
		.bind(ad.views_updated_at)
		.bind(ad.created_at)
		.bind(ad.updated_at)
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	async fn save(&self, ad: &Ad) -> Result<(), StoreError> {
		sqlx::query(
			r#"
			UPDATE ads SET
				make = $2, model = $3, description = $4, region = $5,
				original_price = $6, original_currency = $7,
				price_usd = $8, price_eur = $9, price_uah = $10,
				rate_source = $11, rate_date = $12,
				status = $13, profanity_check_attempts = $14,
				views_total = $15, views_today = $16,
				views_this_week = $17, views_this_month = $18,
				views_updated_at = $19, updated_at = $20
			WHERE id = $1
			"#,
		)
		.bind(ad.id)
		.bind(&ad.make)
		.bind(&ad.model)
		.bind(&ad.description)
		.bind(&ad.region)
		.bind(ad.original_price)
		.bind(ad.original_currency)
		.bind(ad.price_usd)
		.bind(ad.price_eur)
		.bind(ad.price_uah)
		.bind(&ad.rate_source)
		.bind(ad.rate_date)
		.bind(ad.status)
		.bind(ad.profanity_check_attempts)
		.bind(ad.views_total)
		.bind(ad.views_today)
		.bind(ad.views_this_week)
		.bind(ad.views_this_month)
		.bind(ad.views_updated_at)
		.bind(ad.updated_at)
		.execute(&self.pool)
		.await?;

		Ok(())
	}

	async fn find_by_id(&self, id: Uuid) -> Result<Option<Ad>, StoreError> {
		let ad = sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE id = $1")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;

		Ok(ad)
	}

	async fn list_active(&self) -> Result<Vec<Ad>, StoreError> {
		let ads =
			sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE status = $1 ORDER BY created_at DESC")
				.bind(AdStatus::Active)
				.fetch_all(&self.pool)
				.await?;

		Ok(ads)
	}

	async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Ad>, StoreError> {
		let ads =
			sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE owner = $1 ORDER BY created_at DESC")
				.bind(owner)
				.fetch_all(&self.pool)
				.await?;

		Ok(ads)
	}

	async fn count_active_by_owner(&self, owner: Uuid) -> Result<i64, StoreError> {
		let count: i64 =
			sqlx::query_scalar("SELECT COUNT(*) FROM ads WHERE owner = $1 AND status = $2")
				.bind(owner)
				.bind(AdStatus::Active)
				.fetch_one(&self.pool)
				.await?;

		Ok(count)
	}

	async fn average_price_uah(&self, filter: &PriceFilter) -> Result<Option<f64>, StoreError> {
		let average: Option<f64> = match &filter.region {
			Some(region) => {
				sqlx::query_scalar(
					r#"
					SELECT AVG(price_uah) FROM ads
					WHERE make = $1 AND model = $2 AND status = $3 AND region = $4
					"#,
				)
				.bind(&filter.make)
				.bind(&filter.model)
				.bind(AdStatus::Active)
				.bind(region)
				.fetch_one(&self.pool)
				.await?
			}
			None => {
				sqlx::query_scalar(
					r#"
					SELECT AVG(price_uah) FROM ads
					WHERE make = $1 AND model = $2 AND status = $3
					"#,
				)
				.bind(&filter.make)
				.bind(&filter.model)
				.bind(AdStatus::Active)
				.fetch_one(&self.pool)
				.await?
			}
		};

		Ok(average)
	}
}
