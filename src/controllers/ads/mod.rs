pub mod ad_stats;
pub mod create_ad;
pub mod get_ad;
pub mod get_ads;
pub mod update_ad;

pub use self::ad_stats::*;
pub use self::create_ad::*;
pub use self::get_ad::*;
pub use self::get_ads::*;
pub use self::update_ad::*;
