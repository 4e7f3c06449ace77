//! Token age estimation over paged signature history

use crate::mock_gateway::{history, MockGateway, TEST_MINT};
use chrono::{Duration, Utc};
use mint_risk_scanner::gateway::SignatureInfo;
use mint_risk_scanner::scanner::age::{
    check_token_age, oldest_block_time, HISTORY_PAGE_SIZE, MAX_HISTORY_PAGES,
};
use mint_risk_scanner::scanner::parse_mint;
use solana_sdk::pubkey::Pubkey;

fn mint() -> Pubkey {
    parse_mint(TEST_MINT).unwrap()
}

#[tokio::test]
async fn test_no_history_is_unknown_age() {
    let gateway = MockGateway::healthy().with_history(Vec::new());
    let result = check_token_age(&gateway, &mint(), Utc::now()).await;

    assert!(!result.safe);
    assert!(!result.errored);
    assert_eq!(result.weight, 10);
    assert_eq!(result.detail, "unknown age");
    assert_eq!(gateway.history_queries.lock().len(), 1);
}

#[tokio::test]
async fn test_two_hours_old_is_very_new() {
    let gateway = MockGateway::healthy().with_history(history(
        20,
        Duration::minutes(1),
        Duration::seconds(400),
    ));
    // oldest = 60s + 19 * 400s = 7_660s, a little over two hours
    let result = check_token_age(&gateway, &mint(), Utc::now()).await;

    assert!(!result.safe);
    assert_eq!(result.weight, 10);
    assert_eq!(result.detail, "very new: 2h old");
}

#[tokio::test]
async fn test_short_page_stops_paging() {
    let gateway = MockGateway::healthy();
    check_token_age(&gateway, &mint(), Utc::now()).await;

    let queries = gateway.history_queries.lock();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].limit, HISTORY_PAGE_SIZE);
    assert_eq!(queries[0].before, None);
}

#[tokio::test]
async fn test_walks_pages_with_cursor() {
    let signatures = history(2500, Duration::hours(1), Duration::minutes(10));
    let expected_oldest = signatures[2499].block_time;
    let gateway = MockGateway::healthy().with_history(signatures);

    let oldest = oldest_block_time(&gateway, &mint()).await.unwrap();
    assert_eq!(oldest, expected_oldest);

    let queries = gateway.history_queries.lock();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[1].before.as_deref(), Some("sig999"));
    assert_eq!(queries[2].before.as_deref(), Some("sig1999"));
}

#[tokio::test]
async fn test_full_final_page_triggers_one_more_request() {
    let gateway = MockGateway::healthy().with_history(history(
        HISTORY_PAGE_SIZE,
        Duration::hours(1),
        Duration::minutes(1),
    ));
    check_token_age(&gateway, &mint(), Utc::now()).await;

    assert_eq!(gateway.history_queries.lock().len(), 2);
}

#[tokio::test]
async fn test_history_cap_underestimates_age() {
    // 7000 signatures, one per hour: true age ~292 days, visible age ~208 days
    let signatures = history(7000, Duration::zero(), Duration::hours(1));
    let visible_oldest = signatures[MAX_HISTORY_PAGES * HISTORY_PAGE_SIZE - 1].block_time;
    let gateway = MockGateway::healthy().with_history(signatures);

    let oldest = oldest_block_time(&gateway, &mint()).await.unwrap();
    assert_eq!(oldest, visible_oldest);
    assert_eq!(gateway.history_queries.lock().len(), MAX_HISTORY_PAGES);

    let result = check_token_age(&gateway, &mint(), Utc::now()).await;
    assert_eq!(result.detail, "6 months old");
}

#[tokio::test]
async fn test_missing_block_times_skipped() {
    let mut signatures = history(3, Duration::days(40), Duration::days(1));
    signatures.push(SignatureInfo {
        signature: "sig-no-time".to_string(),
        block_time: None,
    });
    let gateway = MockGateway::healthy().with_history(signatures);

    let result = check_token_age(&gateway, &mint(), Utc::now()).await;
    assert!(result.safe);
    assert_eq!(result.detail, "1 month old");
}

#[tokio::test]
async fn test_no_block_times_is_unknown_age() {
    let signatures = vec![SignatureInfo {
        signature: "sig0".to_string(),
        block_time: None,
    }];
    let gateway = MockGateway::healthy().with_history(signatures);

    let result = check_token_age(&gateway, &mint(), Utc::now()).await;
    assert_eq!(result.detail, "unknown age");
}

#[tokio::test]
async fn test_history_failure_fails_open() {
    let gateway = MockGateway::healthy().failing_history();
    let result = check_token_age(&gateway, &mint(), Utc::now()).await;

    assert!(result.safe);
    assert!(result.errored);
    assert_eq!(result.detail, "check unavailable");
}

#[tokio::test]
async fn test_young_but_past_a_day_is_new() {
    let gateway = MockGateway::healthy().with_history(history(
        2,
        Duration::days(3),
        Duration::hours(1),
    ));
    let result = check_token_age(&gateway, &mint(), Utc::now()).await;

    assert!(!result.safe);
    assert_eq!(result.detail, "new: 3d old");
}
