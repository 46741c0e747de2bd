use crate::domain::moderation::ContentModerator;
use crate::models::{Ad, AdStatus};

pub const MAX_PROFANITY_ATTEMPTS: i32 = 3;

// Outcome of a description change. The caller persists the ad and emits the
// matching notification; the transition itself is pure.
#[derive(Debug, PartialEq, Eq)]
pub enum DescriptionVerdict {
	Clean,
	RetryAvailable { attempts_remaining: i32 },
	LimitExceeded,
}

// Initial status for a freshly validated ad.
pub fn screen_new_ad(moderator: &ContentModerator, description: &str) -> (AdStatus, i32) {
	if moderator.contains_disallowed(description) {
		(AdStatus::ReviewRequired, 1)
	} else {
		(AdStatus::Active, 0)
	}
}

// Apply a new description to an ad that is not INACTIVE. A disallowed
// description burns one attempt; the third failed attempt deactivates the ad
// for good. A clean description is how an ad recovers from REVIEW_REQUIRED.
pub fn apply_description(
	ad: &mut Ad,
	description: String,
	moderator: &ContentModerator,
) -> DescriptionVerdict {
	ad.description = description;

	if !moderator.contains_disallowed(&ad.description) {
		ad.status = AdStatus::Active;
		return DescriptionVerdict::Clean;
	}

	ad.profanity_check_attempts += 1;

	if ad.profanity_check_attempts >= MAX_PROFANITY_ATTEMPTS {
		ad.status = AdStatus::Inactive;
		DescriptionVerdict::LimitExceeded
	} else {
		ad.status = AdStatus::ReviewRequired;
		DescriptionVerdict::RetryAvailable {
			attempts_remaining: MAX_PROFANITY_ATTEMPTS - ad.profanity_check_attempts,
		}
	}
}
