use crate::jwt_auth::JwtMiddleware;
use crate::models::{AdStatus, ApiError, CreateAdSchema};
use crate::AppState;
use actix_web::{post, web, HttpResponse};
use serde_json::json;

#[post("/ads")]
pub async fn create_ad_handler(
	data: web::Data<AppState>,
	body: web::Json<CreateAdSchema>,
	jwt: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
	let ad = data
		.engine
		.create_ad(&jwt.principal(), body.into_inner())
		.await?;

	let message = if ad.status == AdStatus::Active {
		"Ad created successfully."
	} else {
		"Ad requires changes due to inappropriate language."
	};

	Ok(HttpResponse::Created().json(json!({
		"status": "success",
		"message": message,
		"ad": ad,
	})))
}
