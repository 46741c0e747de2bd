use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
	#[serde(rename = "BUYER")]
	Buyer,
	#[serde(rename = "SELLER")]
	Seller,
	#[serde(rename = "MANAGER")]
	Manager,
	#[serde(rename = "ADMIN")]
	Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
	#[serde(rename = "BASIC")]
	Basic,
	#[serde(rename = "PREMIUM")]
	Premium,
}

// The authenticated actor, taken from the token as-is. Registration, login
// and credential hashing live in the auth service, not here.
#[derive(Debug, Clone)]
pub struct Principal {
	pub user_id: Uuid,
	pub role: UserRole,
	pub account_type: AccountType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
	pub sub: String,
	pub role: UserRole,
	#[serde(rename = "accountType")]
	pub account_type: AccountType,
	pub iat: usize,
	pub exp: usize,
}
