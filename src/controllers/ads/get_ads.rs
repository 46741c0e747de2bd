use crate::jwt_auth::JwtMiddleware;
use crate::models::ApiError;
use crate::AppState;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

// Public list of ACTIVE ads.
#[get("/ads")]
pub async fn get_ads_handler(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	let ads = data.engine.list_active_ads().await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"message": "List of active ads.",
		"ads": ads,
	})))
}

// All ads of the current seller, whatever their status.
#[get("/ads/my")]
pub async fn get_my_ads_handler(
	data: web::Data<AppState>,
	jwt: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
	let ads = data.engine.list_ads_by_owner(jwt.user_id).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"message": "List of your ads.",
		"ads": ads,
	})))
}
