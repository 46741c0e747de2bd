pub mod ads;
mod config;

pub use self::config::config;
