use actix_web::web;

use crate::controllers::ads::*;

pub fn config(conf: &mut web::ServiceConfig) {
	let scope = web::scope("/api")
		// ads: /ads/my must be registered before /ads/{id}
		.service(get_ads_handler)
		.service(get_my_ads_handler)
		.service(get_ad_stats_handler)
		.service(get_ad_handler)
		.service(create_ad_handler)
		.service(update_ad_handler);

	conf.service(scope);
}
