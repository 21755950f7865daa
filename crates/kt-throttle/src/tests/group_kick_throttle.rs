use crate::GroupKickThrottle;
use crate::tests::{FailingStore, MemoryStore};

use kt_core::{Cooldown, ManualClock, ThrottleDecision, ThrottleKey};

use std::sync::Arc;

use googletest::prelude::*;

const NOW: i64 = 1_700_000_000;

fn seven_minutes() -> Cooldown {
    Cooldown::from_minutes(7).unwrap()
}

#[tokio::test]
async fn given_never_recorded_group_when_checked_twice_then_second_check_waits_full_threshold() {
    // Given
    let store = Arc::new(MemoryStore::default());
    let throttle = GroupKickThrottle::with_clock(store.clone(), Arc::new(ManualClock::new(NOW)));

    // When: Two checks at the same instant
    let first = throttle
        .check_and_record("gw-1", "contractors", seven_minutes())
        .await
        .unwrap();
    let second = throttle
        .check_and_record("gw-1", "contractors", seven_minutes())
        .await
        .unwrap();

    // Then
    assert_that!(first, eq(ThrottleDecision::Permitted));
    assert_that!(second, eq(ThrottleDecision::Denied { wait_seconds: 420 }));
    assert_that!(
        store.time(&ThrottleKey::group("gw-1", "contractors")),
        some(eq(NOW))
    );
}

#[tokio::test]
async fn given_group_kicked_421s_ago_when_checked_then_permitted_and_time_updated() {
    // Given
    let key = ThrottleKey::group("gw-1", "contractors");
    let store = Arc::new(MemoryStore::with(&[(key.clone(), NOW - 421)]));
    let throttle = GroupKickThrottle::with_clock(store.clone(), Arc::new(ManualClock::new(NOW)));

    // When
    let decision = throttle
        .check_and_record("gw-1", "contractors", seven_minutes())
        .await
        .unwrap();

    // Then
    assert_that!(decision, eq(ThrottleDecision::Permitted));
    assert_that!(store.time(&key), some(eq(NOW)));
    assert_that!(store.writes(), eq(1));
}

#[tokio::test]
async fn given_cooling_down_group_when_checked_repeatedly_then_state_never_changes() {
    // Given
    let key = ThrottleKey::group("gw-1", "contractors");
    let store = Arc::new(MemoryStore::with(&[(key.clone(), NOW - 100)]));
    let clock = Arc::new(ManualClock::new(NOW));
    let throttle = GroupKickThrottle::with_clock(store.clone(), clock.clone());

    // When: Checking repeatedly inside the window
    let mut waits = Vec::new();
    for _ in 0..3 {
        let decision = throttle
            .check_and_record("gw-1", "contractors", seven_minutes())
            .await
            .unwrap();
        waits.push(decision.wait_seconds());
        clock.advance(10);
    }

    // Then
    assert_that!(waits, eq(&vec![320, 310, 300]));
    assert_that!(store.time(&key), some(eq(NOW - 100)));
    assert_that!(store.writes(), eq(0));
}

#[tokio::test]
async fn given_blank_gateway_or_group_when_checked_then_invalid_input() {
    let throttle = GroupKickThrottle::with_clock(
        Arc::new(MemoryStore::default()),
        Arc::new(ManualClock::new(NOW)),
    );

    let no_gateway = throttle
        .check_and_record("", "contractors", seven_minutes())
        .await;
    let no_group = throttle.check_and_record("gw-1", " ", seven_minutes()).await;

    assert_that!(no_gateway.unwrap_err().is_invalid_input(), is_true());
    assert_that!(no_group.unwrap_err().is_invalid_input(), is_true());
}

#[tokio::test]
async fn given_store_down_when_checked_then_error_is_not_folded_into_decision() {
    let throttle =
        GroupKickThrottle::with_clock(Arc::new(FailingStore), Arc::new(ManualClock::new(NOW)));

    let result = throttle
        .check_and_record("gw-1", "contractors", seven_minutes())
        .await;

    assert_that!(result.unwrap_err().is_store_unavailable(), is_true());
}
