pub mod clock;
pub mod error;
pub mod models;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::admin_record::AdminRecord;
pub use models::cooldown::Cooldown;
pub use models::group_throttle_record::GroupThrottleRecord;
pub use models::throttle_decision::ThrottleDecision;
pub use models::throttle_key::ThrottleKey;
pub use store::TimestampStore;


pub const DEFAULT_USER_KICK_THRESHOLD_SECS: i64 = 20;
pub const DEFAULT_GROUP_KICK_THRESHOLD_MINUTES: i64 = 7;
pub const DEFAULT_GATEWAY: &str = "default";
pub const DEFAULT_GROUP: &str = "default";

/// Timestamp a freshly provisioned record starts with. Always eligible.
pub const NEVER_KICKED: i64 = 0;
