use crate::models::{ApiError, CurrencyCode};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

// Multipliers from one source currency into each supported target. The table
// is authoritative: pairs are not required to be arithmetically inverse of
// each other.
#[derive(Debug, Clone, Copy)]
pub struct RateRow {
	pub usd: f64,
	pub eur: f64,
	pub uah: f64,
}

#[derive(Debug, Clone)]
pub struct PriceQuote {
	pub price_usd: f64,
	pub price_eur: f64,
	pub price_uah: f64,
	pub rate_source: String,
	pub rate_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CurrencyConverter {
	source: String,
	rates: HashMap<CurrencyCode, RateRow>,
}

impl CurrencyConverter {
	pub fn new(source: impl Into<String>, rates: HashMap<CurrencyCode, RateRow>) -> Self {
		CurrencyConverter {
			source: source.into(),
			rates,
		}
	}

	// Hard-coded mock rates. In a real deployment this would be replaced by
	// a provider pulling the PrivatBank API.
	pub fn mock_privatbank() -> Self {
		let mut rates = HashMap::new();
		rates.insert(
			CurrencyCode::Usd,
			RateRow {
				usd: 1.0,
				eur: 0.9,
				uah: 40.0,
			},
		);
		rates.insert(
			CurrencyCode::Eur,
			RateRow {
				usd: 1.1,
				eur: 1.0,
				uah: 44.0,
			},
		);
		rates.insert(
			CurrencyCode::Uah,
			RateRow {
				usd: 1.0 / 40.0,
				eur: 1.0 / 44.0,
				uah: 1.0,
			},
		);
		CurrencyConverter::new("MOCK_PRIVATBANK", rates)
	}

	pub fn convert(&self, amount: f64, from: CurrencyCode) -> Result<PriceQuote, ApiError> {
		let row = self
			.rates
			.get(&from)
			.ok_or(ApiError::UnsupportedCurrency(from))?;

		Ok(PriceQuote {
			price_usd: round2(amount * row.usd),
			price_eur: round2(amount * row.eur),
			price_uah: round2(amount * row.uah),
			rate_source: self.source.clone(),
			rate_date: Utc::now(),
		})
	}
}

// Two decimal places, half away from zero on the scaled value.
pub fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}
