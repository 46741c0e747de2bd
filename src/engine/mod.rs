use crate::domain::currency::{round2, CurrencyConverter, PriceQuote};
use crate::domain::lifecycle::{apply_description, screen_new_ad, DescriptionVerdict};
use crate::domain::moderation::ContentModerator;
use crate::domain::views::record_view;
use crate::models::{
	AccountType, Ad, AdStatsResponse, AdStatus, ApiError, AveragePriceStats, CountryAverage,
	CreateAdSchema, CurrencyCode, Principal, RegionAverage, UpdateAdSchema, UserRole, ViewStats,
};
use crate::notify::ModerationNotifier;
use crate::store::{AdStore, PriceFilter};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

// Orchestrates the ad lifecycle over the store. Handlers stay thin: they
// extract the principal and serialize whatever comes back from here.
#[derive(Clone)]
pub struct AdEngine {
	store: Arc<dyn AdStore>,
	notifier: Arc<dyn ModerationNotifier>,
	converter: CurrencyConverter,
	moderator: ContentModerator,
}

impl AdEngine {
	pub fn new(
		store: Arc<dyn AdStore>,
		notifier: Arc<dyn ModerationNotifier>,
		converter: CurrencyConverter,
		moderator: ContentModerator,
	) -> Self {
		AdEngine {
			store,
			notifier,
			converter,
			moderator,
		}
	}

	pub async fn create_ad(
		&self,
		principal: &Principal,
		schema: CreateAdSchema,
	) -> Result<Ad, ApiError> {
		if principal.role != UserRole::Seller {
			return Err(ApiError::Forbidden("Only sellers can create ads.".to_string()));
		}

		let make = required_field(schema.make)?;
		let model = required_field(schema.model)?;
		let description = required_field(schema.description)?;
		let region = required_field(schema.region)?;
		let price = validate_price(schema.price.ok_or_else(missing_fields)?)?;
		let currency = parse_currency(&schema.currency.ok_or_else(missing_fields)?)?;

		// BASIC account: only 1 active ad. The count is advisory: two
		// concurrent creates can both pass before either commits.
		if principal.account_type == AccountType::Basic {
			let active = self.store.count_active_by_owner(principal.user_id).await?;
			if active >= 1 {
				return Err(ApiError::QuotaExceeded);
			}
		}

		let quote = self.converter.convert(price, currency)?;
		let (status, attempts) = screen_new_ad(&self.moderator, &description);
		let now = Utc::now();

		let ad = Ad {
			id: Uuid::new_v4(),
			owner: principal.user_id,
			make,
			model,
			description,
			region,
			original_price: price,
			original_currency: currency,
			price_usd: quote.price_usd,
			price_eur: quote.price_eur,
			price_uah: quote.price_uah,
			rate_source: quote.rate_source,
			rate_date: quote.rate_date,
			status,
			profanity_check_attempts: attempts,
			views_total: 0,
			views_today: 0,
			views_this_week: 0,
			views_this_month: 0,
			views_updated_at: Some(now),
			created_at: now,
			updated_at: now,
		};

		self.store.insert(&ad).await?;

		if ad.status == AdStatus::ReviewRequired {
			self.notifier
				.notify(&ad, "Bad words detected on creation")
				.await;
		}

		Ok(ad)
	}

	pub async fn list_active_ads(&self) -> Result<Vec<Ad>, ApiError> {
		Ok(self.store.list_active().await?)
	}

	pub async fn list_ads_by_owner(&self, owner: Uuid) -> Result<Vec<Ad>, ApiError> {
		Ok(self.store.list_by_owner(owner).await?)
	}

	// Public read: only ACTIVE ads are visible, and every hit counts a view.
	pub async fn get_ad(&self, id: Uuid) -> Result<Ad, ApiError> {
		let mut ad = self.store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

		if ad.status != AdStatus::Active {
			return Err(ApiError::NotFound);
		}

		record_view(&mut ad, Utc::now());
		self.store.save(&ad).await?;

		Ok(ad)
	}

	pub async fn edit_ad(
		&self,
		principal: &Principal,
		id: Uuid,
		schema: UpdateAdSchema,
	) -> Result<Ad, ApiError> {
		let mut ad = self.store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

		if ad.owner != principal.user_id {
			return Err(ApiError::Forbidden(
				"You can edit only your own ads.".to_string(),
			));
		}

		if ad.status == AdStatus::Inactive {
			return Err(ApiError::AlreadyInactive);
		}

		if let Some(make) = non_empty(schema.make) {
			ad.make = make;
		}
		if let Some(model) = non_empty(schema.model) {
			ad.model = model;
		}
		if let Some(region) = non_empty(schema.region) {
			ad.region = region;
		}

		let mut recalculate = false;

		if let Some(price) = schema.price {
			ad.original_price = validate_price(price)?;
			recalculate = true;
		}
		if let Some(raw) = schema.currency {
			ad.original_currency = parse_currency(&raw)?;
			recalculate = true;
		}
		if recalculate {
			let quote = self
				.converter
				.convert(ad.original_price, ad.original_currency)?;
			apply_quote(&mut ad, quote);
		}

		// Status moves only through the description-moderation path; edits
		// that omit the description leave it untouched.
		if let Some(description) = schema.description {
			match apply_description(&mut ad, description, &self.moderator) {
				DescriptionVerdict::Clean => {}
				DescriptionVerdict::RetryAvailable { attempts_remaining } => {
					ad.updated_at = Utc::now();
					self.store.save(&ad).await?;
					self.notifier
						.notify(&ad, "Bad words detected on update")
						.await;
					return Err(ApiError::ModerationRetryAvailable {
						attempts_remaining,
						ad: Box::new(ad),
					});
				}
				DescriptionVerdict::LimitExceeded => {
					ad.updated_at = Utc::now();
					self.store.save(&ad).await?;
					self.notifier
						.notify(&ad, "Ad deactivated after 3 failed profanity checks")
						.await;
					return Err(ApiError::ModerationLimitExceeded { ad: Box::new(ad) });
				}
			}
		}

		ad.updated_at = Utc::now();
		self.store.save(&ad).await?;

		Ok(ad)
	}

	pub async fn ad_stats(
		&self,
		principal: &Principal,
		id: Uuid,
	) -> Result<AdStatsResponse, ApiError> {
		let ad = self.store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;

		if ad.owner != principal.user_id {
			return Err(ApiError::Forbidden(
				"You can see statistics only for your own ads.".to_string(),
			));
		}

		if principal.account_type != AccountType::Premium {
			return Err(ApiError::Forbidden(
				"Only PREMIUM sellers can see detailed statistics.".to_string(),
			));
		}

		let region_average = self
			.store
			.average_price_uah(&PriceFilter {
				make: ad.make.clone(),
				model: ad.model.clone(),
				region: Some(ad.region.clone()),
			})
			.await?;

		let country_average = self
			.store
			.average_price_uah(&PriceFilter {
				make: ad.make.clone(),
				model: ad.model.clone(),
				region: None,
			})
			.await?;

		Ok(AdStatsResponse {
			views: ViewStats {
				total: ad.views_total,
				today: ad.views_today,
				this_week: ad.views_this_week,
				this_month: ad.views_this_month,
			},
			average_price: AveragePriceStats {
				region: RegionAverage {
					region: ad.region.clone(),
					currency: "UAH".to_string(),
					value: region_average.map(round2),
				},
				country: CountryAverage {
					currency: "UAH".to_string(),
					value: country_average.map(round2),
				},
			},
		})
	}
}

fn missing_fields() -> ApiError {
	ApiError::Validation("Missing required fields.".to_string())
}

fn required_field(value: Option<String>) -> Result<String, ApiError> {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
		.ok_or_else(missing_fields)
}

// The original treats empty strings as absent on partial edits.
fn non_empty(value: Option<String>) -> Option<String> {
	value
		.map(|v| v.trim().to_string())
		.filter(|v| !v.is_empty())
}

fn validate_price(price: f64) -> Result<f64, ApiError> {
	if price.is_finite() && price > 0.0 {
		Ok(price)
	} else {
		Err(ApiError::Validation(
			"Price must be a positive number.".to_string(),
		))
	}
}

fn parse_currency(raw: &str) -> Result<CurrencyCode, ApiError> {
	raw.parse().map_err(|_| {
		ApiError::Validation("Currency must be one of USD, EUR or UAH.".to_string())
	})
}

fn apply_quote(ad: &mut Ad, quote: PriceQuote) {
	ad.price_usd = quote.price_usd;
	ad.price_eur = quote.price_eur;
	ad.price_uah = quote.price_uah;
	ad.rate_source = quote.rate_source;
	ad.rate_date = quote.rate_date;
}
