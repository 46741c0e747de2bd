use crate::controllers::ads::get_ad::parse_ad_id;
use crate::jwt_auth::JwtMiddleware;
use crate::models::ApiError;
use crate::AppState;
use actix_web::web::Path;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

// Views and regional/national average prices, for the PREMIUM owner only.
#[get("/ads/{id}/stats")]
pub async fn get_ad_stats_handler(
	path: Path<String>,
	data: web::Data<AppState>,
	jwt: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
	let ad_id = parse_ad_id(&path.into_inner())?;
	let stats = data.engine.ad_stats(&jwt.principal(), ad_id).await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"message": "Statistics for this ad (PREMIUM only).",
		"stats": stats,
	})))
}
