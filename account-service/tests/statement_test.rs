//! Statement and balance query integration tests.

mod common;

use chrono::Utc;
use common::{body, TestApp};
use serde_json::json;

#[tokio::test]
async fn statement_lists_entries_in_insertion_order() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;
    app.deposit("222", "salary", json!(100)).await;
    app.withdraw("222", json!(30)).await;

    let response = app.statement("222").await;
    assert_eq!(response.status(), 200);

    let body = body(response).await;
    let statement = body["statement"].as_array().unwrap();
    assert_eq!(statement.len(), 2);
    assert_eq!(statement[0]["type"], "credit");
    assert_eq!(statement[0]["description"], "salary");
    assert_eq!(statement[1]["type"], "debit");
    assert!(statement[1].get("description").is_none());
    assert_eq!(body["balance"], "70");
}

#[tokio::test]
async fn empty_statement_has_zero_balance() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;

    let body = body(app.statement("222").await).await;
    assert_eq!(body["statement"], json!([]));
    assert_eq!(body["balance"], "0");
}

#[tokio::test]
async fn statement_by_date_returns_todays_entries() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;

    let before = Utc::now().date_naive();
    app.deposit("222", "salary", json!(100)).await;
    app.withdraw("222", json!(40)).await;
    let after = Utc::now().date_naive();

    // Entries may straddle UTC midnight; together the two days hold both
    let mut matched = 0;
    for day in [before, after] {
        let response = app
            .statement_by_date("222", &day.format("%Y-%m-%d").to_string())
            .await;
        assert_eq!(response.status(), 200);

        let body = body(response).await;
        assert_eq!(body["balance"], "60");
        matched += body["statement"].as_array().unwrap().len();
        if before == after {
            break;
        }
    }
    assert_eq!(matched, 2);
}

#[tokio::test]
async fn statement_by_date_keeps_full_balance_for_other_days() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;
    app.deposit("222", "salary", json!(100)).await;

    let response = app.statement_by_date("222", "2000-01-01").await;
    assert_eq!(response.status(), 200);

    let body = body(response).await;
    assert_eq!(body["statement"], json!([]));
    assert_eq!(body["balance"], "100");
}

#[tokio::test]
async fn statement_by_date_rejects_malformed_date() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;

    let response = app.statement_by_date("222", "15/10/2026").await;
    assert_eq!(response.status(), 400);
    assert_eq!(body(response).await["error"], "invalid_argument");
}

#[tokio::test]
async fn statement_by_date_requires_date_parameter() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;

    let response = app
        .client
        .get(format!("{}/statement/date", app.address))
        .header("cpf", "222")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(body(response).await["error"], "invalid_argument");
}

#[tokio::test]
async fn statement_for_unknown_cpf_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.statement("404").await;
    assert_eq!(response.status(), 400);
    assert_eq!(body(response).await["error"], "account_not_found");
}

#[tokio::test]
async fn balance_endpoint_sums_signed_entries() {
    let app = TestApp::spawn().await;
    app.create_account("222", "Bob").await;
    app.deposit("222", "salary", json!("10.50")).await;
    app.deposit("222", "gift", json!(5)).await;
    app.withdraw("222", json!("0.50")).await;

    let response = app.balance("222").await;
    assert_eq!(response.status(), 200);
    assert_eq!(body(response).await["balance"], "15.00");
}
