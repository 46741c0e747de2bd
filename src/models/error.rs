use crate::models::{Ad, CurrencyCode};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
	#[error("{0}")]
	Validation(String),
	#[error("Unauthorized.")]
	Unauthorized,
	#[error("{0}")]
	Forbidden(String),
	#[error("BASIC account can only have 1 active advertisement. Upgrade to PREMIUM.")]
	QuotaExceeded,
	#[error("Ad is inactive and cannot be edited anymore.")]
	AlreadyInactive,
	#[error("Ad contains forbidden words. You can edit it {attempts_remaining} more time(s).")]
	ModerationRetryAvailable { attempts_remaining: i32, ad: Box<Ad> },
	#[error("Ad contains forbidden words. You have reached the maximum number of attempts. Ad is now INACTIVE and will be reviewed by a manager.")]
	ModerationLimitExceeded { ad: Box<Ad> },
	#[error("Ad not found.")]
	NotFound,
	#[error("Unsupported currency {0}.")]
	UnsupportedCurrency(CurrencyCode),
	#[error("Internal server error.")]
	InternalServerError(String),
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Validation(_)
			| ApiError::AlreadyInactive
			| ApiError::ModerationRetryAvailable { .. }
			| ApiError::ModerationLimitExceeded { .. }
			| ApiError::UnsupportedCurrency(_) => StatusCode::BAD_REQUEST,
			ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
			ApiError::Forbidden(_) | ApiError::QuotaExceeded => StatusCode::FORBIDDEN,
			ApiError::NotFound => StatusCode::NOT_FOUND,
			ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let body = match self {
			// moderation outcomes carry the persisted ad so the owner sees
			// the state they ended up in
			ApiError::ModerationRetryAvailable {
				attempts_remaining,
				ad,
			} => json!({
				"status": "fail",
				"message": self.to_string(),
				"attemptsRemaining": attempts_remaining,
				"ad": ad,
			}),
			ApiError::ModerationLimitExceeded { ad } => json!({
				"status": "fail",
				"message": self.to_string(),
				"ad": ad,
			}),
			ApiError::InternalServerError(detail) => {
				log::error!("internal server error: {}", detail);
				json!({"status": "error", "message": self.to_string()})
			}
			_ => json!({"status": "fail", "message": self.to_string()}),
		};

		HttpResponse::build(self.status_code()).json(body)
	}
}
