use crate::models::ApiError;
use crate::AppState;
use actix_web::web::Path;
use actix_web::{get, web, HttpResponse};
use serde_json::json;
use uuid::Uuid;

// Public details of a single ACTIVE ad. Every hit records a view.
#[get("/ads/{id}")]
pub async fn get_ad_handler(
	path: Path<String>,
	data: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
	let ad_id = parse_ad_id(&path.into_inner())?;
	let ad = data.engine.get_ad(ad_id).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"message": "Ad details.",
		"ad": ad,
	})))
}

pub fn parse_ad_id(raw: &str) -> Result<Uuid, ApiError> {
	Uuid::parse_str(raw).map_err(|_| ApiError::Validation("Invalid ad id.".to_string()))
}
