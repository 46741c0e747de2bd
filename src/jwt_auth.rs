use crate::models::{AccountType, ApiError, Principal, TokenClaims, UserRole};
use crate::AppState;
use actix_web::dev::Payload;
use actix_web::{http, web, Error as ActixWebError, FromRequest, HttpRequest};
use jsonwebtoken::{decode, DecodingKey, Validation};
use std::future::{ready, Ready};
use uuid::Uuid;

// Extractor that turns the bearer token (or the `token` cookie) into the
// authenticated principal. The claims payload is trusted as-is; the auth
// service that issued the token owns registration and credentials.
pub struct JwtMiddleware {
	pub user_id: Uuid,
	pub role: UserRole,
	pub account_type: AccountType,
}

impl JwtMiddleware {
	pub fn principal(&self) -> Principal {
		Principal {
			user_id: self.user_id,
			role: self.role,
			account_type: self.account_type,
		}
	}
}

impl FromRequest for JwtMiddleware {
	type Error = ActixWebError;
	type Future = Ready<Result<Self, Self::Error>>;

	fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
		let data = match req.app_data::<web::Data<AppState>>() {
			Some(data) => data,
			None => {
				return ready(Err(
					ApiError::InternalServerError("app state is not configured".to_string()).into(),
				))
			}
		};

		let token = req
			.cookie("token")
			.map(|cookie| cookie.value().to_string())
			.or_else(|| {
				req.headers()
					.get(http::header::AUTHORIZATION)
					.and_then(|header| header.to_str().ok())
					.and_then(|header| header.strip_prefix("Bearer "))
					.map(|token| token.to_string())
			});

		let token = match token {
			Some(token) => token,
			None => return ready(Err(ApiError::Unauthorized.into())),
		};

		let claims = match decode::<TokenClaims>(
			&token,
			&DecodingKey::from_secret(data.env.jwt_secret.as_ref()),
			&Validation::default(),
		) {
			Ok(decoded) => decoded.claims,
			Err(_) => return ready(Err(ApiError::Unauthorized.into())),
		};

		let user_id = match Uuid::parse_str(&claims.sub) {
			Ok(user_id) => user_id,
			Err(_) => return ready(Err(ApiError::Unauthorized.into())),
		};

		ready(Ok(JwtMiddleware {
			user_id,
			role: claims.role,
			account_type: claims.account_type,
		}))
	}
}
