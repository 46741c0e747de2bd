#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub jwt_secret: String,
	pub rabbitmq_url: Option<String>,
	pub banned_words: Option<Vec<String>>,
}

impl Config {
	pub fn init() -> Config {
		let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
		let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
		let rabbitmq_url = std::env::var("RABBITMQ_URL").ok();
		// comma-separated override for the demo denylist
		let banned_words = std::env::var("BANNED_WORDS").ok().map(|raw| {
			raw.split(',')
				.map(|word| word.trim().to_string())
				.filter(|word| !word.is_empty())
				.collect()
		});

		Config {
			database_url,
			jwt_secret,
			rabbitmq_url,
			banned_words,
		}
	}
}
