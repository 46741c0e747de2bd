use crate::models::Ad;
use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, ExchangeDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel};

// Fire-and-forget manager notification. Failures are logged and swallowed;
// they must never fail the ad operation that triggered them.
#[async_trait]
pub trait ModerationNotifier: Send + Sync {
	async fn notify(&self, ad: &Ad, reason: &str);
}

pub struct LogNotifier;

#[async_trait]
impl ModerationNotifier for LogNotifier {
	async fn notify(&self, ad: &Ad, reason: &str) {
		log::info!(
			"[MANAGER NOTIFICATION] ad_id={} status={} reason={}",
			ad.id,
			ad.status,
			reason
		);
	}
}

pub struct RabbitNotifier {
	channel: Channel,
}

pub const MODERATION_EXCHANGE: &str = "moderation_exchange";
const MODERATION_ROUTING_KEY: &str = "moderation.ads";

impl RabbitNotifier {
	pub fn new(channel: Channel) -> Self {
		RabbitNotifier { channel }
	}

	pub async fn declare_exchange(channel: &Channel) -> Result<(), lapin::Error> {
		channel
			.exchange_declare(
				MODERATION_EXCHANGE,
				lapin::ExchangeKind::Topic,
				ExchangeDeclareOptions {
					durable: true,
					..ExchangeDeclareOptions::default()
				},
				FieldTable::default(),
			)
			.await
	}
}

#[async_trait]
impl ModerationNotifier for RabbitNotifier {
	async fn notify(&self, ad: &Ad, reason: &str) {
		let payload = serde_json::json!({
			"adId": ad.id,
			"status": ad.status,
			"reason": reason,
		})
		.to_string();

		let publish = self
			.channel
			.basic_publish(
				MODERATION_EXCHANGE,
				MODERATION_ROUTING_KEY,
				BasicPublishOptions::default(),
				payload.as_bytes(),
				BasicProperties::default(),
			)
			.await;

		if let Err(err) = publish {
			log::warn!(
				"Failed to publish moderation notification for ad {}: {}",
				ad.id,
				err
			);
		}
	}
}
