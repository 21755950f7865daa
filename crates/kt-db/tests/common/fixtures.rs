use kt_core::{AdminRecord, GroupThrottleRecord};

/// Creates a freshly provisioned admin
pub fn create_test_admin(username: &str) -> AdminRecord {
    AdminRecord::new(username, format!("$argon2id$v=19$test${username}"))
}

/// Creates a freshly provisioned gateway group
pub fn create_test_group(gateway: &str, group: &str) -> GroupThrottleRecord {
    GroupThrottleRecord::new(gateway, group)
}
