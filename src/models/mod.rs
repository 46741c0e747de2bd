pub mod ads;
pub mod error;
pub mod users;

pub use self::ads::*;
pub use self::error::*;
pub use self::users::*;
