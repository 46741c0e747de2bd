use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "ad_status")]
pub enum AdStatus {
	#[serde(rename = "ACTIVE")]
	#[sqlx(rename = "ACTIVE")]
	Active,
	#[serde(rename = "INACTIVE")]
	#[sqlx(rename = "INACTIVE")]
	Inactive,
	// bad words detected, owner can still fix the description
	#[serde(rename = "REVIEW_REQUIRED")]
	#[sqlx(rename = "REVIEW_REQUIRED")]
	ReviewRequired,
}

impl fmt::Display for AdStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AdStatus::Active => write!(f, "ACTIVE"),
			AdStatus::Inactive => write!(f, "INACTIVE"),
			AdStatus::ReviewRequired => write!(f, "REVIEW_REQUIRED"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "currency_code")]
pub enum CurrencyCode {
	#[serde(rename = "USD")]
	#[sqlx(rename = "USD")]
	Usd,
	#[serde(rename = "EUR")]
	#[sqlx(rename = "EUR")]
	Eur,
	#[serde(rename = "UAH")]
	#[sqlx(rename = "UAH")]
	Uah,
}

impl fmt::Display for CurrencyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CurrencyCode::Usd => write!(f, "USD"),
			CurrencyCode::Eur => write!(f, "EUR"),
			CurrencyCode::Uah => write!(f, "UAH"),
		}
	}
}

impl FromStr for CurrencyCode {
	type Err = ();

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw {
			"USD" => Ok(CurrencyCode::Usd),
			"EUR" => Ok(CurrencyCode::Eur),
			"UAH" => Ok(CurrencyCode::Uah),
			_ => Err(()),
		}
	}
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
	pub id: Uuid,
	pub owner: Uuid,
	pub make: String,
	pub model: String,
	pub description: String,
	pub region: String,
	pub original_price: f64,
	pub original_currency: CurrencyCode,
	#[serde(rename = "priceUSD")]
	pub price_usd: f64,
	#[serde(rename = "priceEUR")]
	pub price_eur: f64,
	#[serde(rename = "priceUAH")]
	pub price_uah: f64,
	pub rate_source: String,
	pub rate_date: DateTime<Utc>,
	pub status: AdStatus,
	pub profanity_check_attempts: i32,
	pub views_total: i64,
	pub views_today: i64,
	pub views_this_week: i64,
	pub views_this_month: i64,
	// windows reset independently, so views_total >= windowed counters is not guaranteed
	pub views_updated_at: Option<DateTime<Utc>>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAdSchema {
	pub make: Option<String>,
	pub model: Option<String>,
	pub description: Option<String>,
	pub region: Option<String>,
	pub price: Option<f64>,
	pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAdSchema {
	pub make: Option<String>,
	pub model: Option<String>,
	pub description: Option<String>,
	pub region: Option<String>,
	pub price: Option<f64>,
	pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdStatsResponse {
	pub views: ViewStats,
	pub average_price: AveragePriceStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStats {
	pub total: i64,
	pub today: i64,
	pub this_week: i64,
	pub this_month: i64,
}

#[derive(Debug, Serialize)]
pub struct AveragePriceStats {
	pub region: RegionAverage,
	pub country: CountryAverage,
}

#[derive(Debug, Serialize)]
pub struct RegionAverage {
	pub region: String,
	pub currency: String,
	pub value: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CountryAverage {
	pub currency: String,
	pub value: Option<f64>,
}
