pub mod admin_record;
pub mod cooldown;
pub mod group_throttle_record;
pub mod throttle_decision;
pub mod throttle_key;
