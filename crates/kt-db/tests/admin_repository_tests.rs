mod common;

use common::{create_test_admin, create_test_pool, insert_admin_at};

use kt_db::{AdminRepository, DbError};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_admin_when_created_then_can_be_found_with_zero_kick_time() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let admin = create_test_admin("alice");

    // When: Creating the admin
    let created = AdminRepository::create_if_absent(&pool, &admin).await.unwrap();

    // Then: The admin is stored with timestamp 0
    assert_that!(created, is_true());
    let found = AdminRepository::find_by_username(&pool, "alice")
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.hash, eq(&admin.hash));
    assert_that!(found.last_user_kick_time, eq(0));
}

#[tokio::test]
async fn given_existing_admin_when_created_again_then_keeps_existing_row() {
    // Given: An admin who has already kicked someone
    let pool = create_test_pool().await;
    insert_admin_at(&pool, "alice", 1_700_000_000).await;

    // When: Creating the same username again
    let created = AdminRepository::create_if_absent(&pool, &create_test_admin("alice"))
        .await
        .unwrap();

    // Then: Nothing changes
    assert_that!(created, is_false());
    let time = AdminRepository::find_last_user_kick_time(&pool, "alice")
        .await
        .unwrap();
    assert_that!(time, some(eq(1_700_000_000)));
}

#[tokio::test]
async fn given_unknown_admin_when_finding_kick_time_then_returns_none() {
    let pool = create_test_pool().await;

    let time = AdminRepository::find_last_user_kick_time(&pool, "nobody")
        .await
        .unwrap();

    assert_that!(time, none());
}

#[tokio::test]
async fn given_existing_admin_when_updating_kick_time_then_value_is_persisted() {
    // Given
    let pool = create_test_pool().await;
    insert_admin_at(&pool, "alice", 0).await;

    // When
    AdminRepository::update_last_user_kick_time(&pool, "alice", 1_700_000_100)
        .await
        .unwrap();

    // Then
    let time = AdminRepository::find_last_user_kick_time(&pool, "alice")
        .await
        .unwrap();
    assert_that!(time, some(eq(1_700_000_100)));
}

#[tokio::test]
async fn given_unknown_admin_when_updating_kick_time_then_record_not_found() {
    let pool = create_test_pool().await;

    let result = AdminRepository::update_last_user_kick_time(&pool, "nobody", 1).await;

    assert!(matches!(result, Err(DbError::RecordNotFound { .. })));
}

#[tokio::test]
async fn given_matching_expected_time_when_compare_and_set_then_swaps() {
    // Given
    let pool = create_test_pool().await;
    insert_admin_at(&pool, "alice", 100).await;

    // When
    let swapped = AdminRepository::compare_and_set_last_user_kick_time(&pool, "alice", 100, 500)
        .await
        .unwrap();

    // Then
    assert_that!(swapped, is_true());
    let time = AdminRepository::find_last_user_kick_time(&pool, "alice")
        .await
        .unwrap();
    assert_that!(time, some(eq(500)));
}

#[tokio::test]
async fn given_stale_expected_time_when_compare_and_set_then_leaves_row_untouched() {
    // Given
    let pool = create_test_pool().await;
    insert_admin_at(&pool, "alice", 200).await;

    // When
    let swapped = AdminRepository::compare_and_set_last_user_kick_time(&pool, "alice", 100, 500)
        .await
        .unwrap();

    // Then
    assert_that!(swapped, is_false());
    let time = AdminRepository::find_last_user_kick_time(&pool, "alice")
        .await
        .unwrap();
    assert_that!(time, some(eq(200)));
}
