pub mod admin_repository;
pub mod group_throttle_repository;
