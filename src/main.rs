mod config;
mod controllers;
mod domain;
mod engine;
mod jwt_auth;
mod models;
mod notify;
mod store;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::Config;
use domain::currency::CurrencyConverter;
use domain::moderation::ContentModerator;
use dotenv::dotenv;
use engine::AdEngine;
use notify::{LogNotifier, ModerationNotifier, RabbitNotifier};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use store::postgres::PostgresAdStore;

pub struct AppState {
	engine: AdEngine,
	env: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	if std::env::var_os("RUST_LOG").is_none() {
		std::env::set_var("RUST_LOG", "actix_web=info");
	}
	dotenv().ok();
	env_logger::init();

	let config = Config::init();

	let pool = match PgPoolOptions::new()
		.max_connections(10)
		.connect(&config.database_url)
		.await
	{
		Ok(pool) => {
			println!("✅ Connection to the database is successful!");
			pool
		}
		Err(err) => {
			println!("🔥 Failed to connect to the database: {:?}", err);
			std::process::exit(1);
		}
	};

	if let Err(err) = sqlx::migrate!().run(&pool).await {
		println!("🔥 Failed to run database migrations: {:?}", err);
		std::process::exit(1);
	}

	// Moderation notifications go to RabbitMQ when configured, otherwise to
	// the log. Either way they stay best-effort.
	let notifier: Arc<dyn ModerationNotifier> = match &config.rabbitmq_url {
		Some(rabbitmq_url) => {
			let conn = match lapin::Connection::connect(
				rabbitmq_url,
				lapin::ConnectionProperties::default(),
			)
			.await
			{
				Ok(conn) => {
					println!("✅ Connection to the RabbitMQ is successful!");
					conn
				}
				Err(err) => {
					println!("🔥 Failed to connect to the RabbitMQ: {:?}", err);
					std::process::exit(1);
				}
			};
			let channel = match conn.create_channel().await {
				Ok(channel) => {
					println!("✅ RabbitMQ Channel established successfuly!");
					channel
				}
				Err(err) => {
					println!("🔥 Failed to connect to the RabbitMQ: {:?}", err);
					std::process::exit(1);
				}
			};
			if let Err(err) = RabbitNotifier::declare_exchange(&channel).await {
				println!("🔥 Failed to declare the moderation exchange: {:?}", err);
				std::process::exit(1);
			}
			Arc::new(RabbitNotifier::new(channel))
		}
		None => {
			println!("RABBITMQ_URL is not set, moderation notifications go to the log");
			Arc::new(LogNotifier)
		}
	};

	let moderator = match &config.banned_words {
		Some(words) => ContentModerator::new(words.clone()),
		None => ContentModerator::demo_list(),
	};

	let engine = AdEngine::new(
		Arc::new(PostgresAdStore::new(pool.clone())),
		notifier,
		CurrencyConverter::mock_privatbank(),
		moderator,
	);

	println!("✅ Server started successfully on http://localhost:8081/api");

	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(AppState {
				engine: engine.clone(),
				env: config.clone(),
			}))
			.configure(controllers::config)
			.wrap(Cors::permissive())
			.wrap(Logger::default())
	})
	.bind(("127.0.0.1", 8081))?
	.run()
	.await
}
