use crate::models::Ad;
use chrono::{DateTime, Duration, Utc};

// The month window is a literal 30-day approximation, not a calendar month.
fn day() -> Duration {
	Duration::days(1)
}

fn week() -> Duration {
	Duration::days(7)
}

fn month() -> Duration {
	Duration::days(30)
}

// Reset stale windows, then count the view. The three window checks are
// independent: a long enough gap resets all of them on one call.
pub fn record_view(ad: &mut Ad, now: DateTime<Utc>) {
	let last = ad.views_updated_at.unwrap_or(ad.created_at);
	let elapsed = now - last;

	if elapsed > day() {
		ad.views_today = 0;
	}
	if elapsed > week() {
		ad.views_this_week = 0;
	}
	if elapsed > month() {
		ad.views_this_month = 0;
	}

	ad.views_total += 1;
	ad.views_today += 1;
	ad.views_this_week += 1;
	ad.views_this_month += 1;
	ad.views_updated_at = Some(now);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::{AdStatus, CurrencyCode};
	use uuid::Uuid;

	fn sample_ad(created_at: DateTime<Utc>) -> Ad {
		Ad {
			id: Uuid::new_v4(),
			owner: Uuid::new_v4(),
			make: "BMW".to_string(),
			model: "X5".to_string(),
			description: "clean description".to_string(),
			region: "Kyiv".to_string(),
			original_price: 1000.0,
			original_currency: CurrencyCode::Usd,
			price_usd: 1000.0,
			price_eur: 900.0,
			price_uah: 40000.0,
			rate_source: "MOCK_PRIVATBANK".to_string(),
			rate_date: created_at,
			status: AdStatus::Active,
			profanity_check_attempts: 0,
			views_total: 0,
			views_today: 0,
			views_this_week: 0,
			views_this_month: 0,
			views_updated_at: None,
			created_at,
			updated_at: created_at,
		}
	}

	#[test]
	fn n_views_advance_total_by_n() {
		let start = Utc::now();
		let mut ad = sample_ad(start);

		for i in 1..=5 {
			record_view(&mut ad, start + Duration::minutes(i));
		}

		assert_eq!(ad.views_total, 5);
		assert_eq!(ad.views_today, 5);
		assert_eq!(ad.views_this_week, 5);
		assert_eq!(ad.views_this_month, 5);
	}

	#[test]
	fn day_gap_resets_only_the_day_window() {
		let start = Utc::now();
		let mut ad = sample_ad(start);

		record_view(&mut ad, start);
		record_view(&mut ad, start + Duration::days(2));

		assert_eq!(ad.views_total, 2);
		assert_eq!(ad.views_today, 1);
		assert_eq!(ad.views_this_week, 2);
		assert_eq!(ad.views_this_month, 2);
	}

	#[test]
	fn long_gap_resets_all_windows() {
		let start = Utc::now();
		let mut ad = sample_ad(start);

		record_view(&mut ad, start);
		record_view(&mut ad, start + Duration::days(31));

		assert_eq!(ad.views_total, 2);
		assert_eq!(ad.views_today, 1);
		assert_eq!(ad.views_this_week, 1);
		assert_eq!(ad.views_this_month, 1);
	}

	#[test]
	fn falls_back_to_created_at_when_never_viewed() {
		let start = Utc::now();
		let mut ad = sample_ad(start - Duration::days(8));

		record_view(&mut ad, start);

		// day and week windows were stale relative to created_at
		assert_eq!(ad.views_total, 1);
		assert_eq!(ad.views_today, 1);
		assert_eq!(ad.views_this_week, 1);
		assert_eq!(ad.views_updated_at, Some(start));
	}
}
