use crate::controllers::ads::get_ad::parse_ad_id;
use crate::jwt_auth::JwtMiddleware;
use crate::models::{ApiError, UpdateAdSchema};
use crate::AppState;
use actix_web::web::Path;
use actix_web::{patch, web, HttpResponse};
use serde_json::json;

#[patch("/ads/{id}")]
pub async fn update_ad_handler(
	path: Path<String>,
	data: web::Data<AppState>,
	body: web::Json<UpdateAdSchema>,
	jwt: JwtMiddleware,
) -> Result<HttpResponse, ApiError> {
	let ad_id = parse_ad_id(&path.into_inner())?;
	let ad = data
		.engine
		.edit_ad(&jwt.principal(), ad_id, body.into_inner())
		.await?;

	Ok(HttpResponse::Ok().json(json!({
		"status": "success",
		"message": "Ad updated successfully.",
		"ad": ad,
	})))
}
