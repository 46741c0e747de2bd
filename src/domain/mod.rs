pub mod currency;
pub mod lifecycle;
pub mod moderation;
pub mod views;
