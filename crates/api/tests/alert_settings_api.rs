//! Integration tests for `/api/v1/users/{user_id}/alert-settings`.

mod common;

use airwatch_core::store::SettingsStore;
use airwatch_core::types::UserId;
use axum::http::StatusCode;
use serde_json::json;

use common::{build_test_app, expect_json, get, put_json, settings_uri};

fn valid_body() -> serde_json::Value {
    json!({
        "email": "user@example.com",
        "phone": "+15551234567",
        "push_enabled": true,
        "email_enabled": true,
        "sms_enabled": false,
        "threshold": 100
    })
}

#[tokio::test]
async fn put_then_get_round_trips() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let response = put_json(&app.router, &settings_uri(user_id), &valid_body()).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["email"], "user@example.com");
    assert_eq!(body["data"]["threshold"], 100);

    let response = get(&app.router, &settings_uri(user_id)).await;
    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["saved"], true);
    assert_eq!(body["data"]["user_id"], user_id.to_string());
    assert_eq!(body["data"]["phone"], "+15551234567");
    assert_eq!(body["data"]["sms_enabled"], false);
}

#[tokio::test]
async fn camel_case_fields_are_accepted() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let response = put_json(
        &app.router,
        &settings_uri(user_id),
        &json!({
            "email": "user@example.com",
            "pushEnabled": false,
            "emailEnabled": true,
            "smsEnabled": false,
            "threshold": 75
        }),
    )
    .await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body["data"]["push_enabled"], false);
    assert_eq!(body["data"]["phone"], serde_json::Value::Null);
}

#[tokio::test]
async fn get_unknown_user_returns_unsaved_defaults() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let response = get(&app.router, &settings_uri(user_id)).await;
    let body = expect_json(response, StatusCode::OK).await;

    assert_eq!(body["saved"], false);
    assert_eq!(body["data"]["user_id"], user_id.to_string());
    assert_eq!(body["data"]["push_enabled"], true);
    assert_eq!(body["data"]["email_enabled"], false);
    assert_eq!(body["data"]["sms_enabled"], false);
    assert_eq!(body["data"]["threshold"], 100);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn missing_email_is_a_field_error() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("email");
    let response = put_json(&app.router, &settings_uri(user_id), &body).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["fields"]["email"], json!(["Email is required"]));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn non_numeric_threshold_is_a_field_error() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let mut body = valid_body();
    body["threshold"] = json!("abc");
    let response = put_json(&app.router, &settings_uri(user_id), &body).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["fields"]["threshold"], json!(["Threshold must be a number"]));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn missing_toggles_are_field_errors() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let response = put_json(
        &app.router,
        &settings_uri(user_id),
        &json!({ "email": "user@example.com", "threshold": 100 }),
    )
    .await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    for toggle in ["push_enabled", "email_enabled", "sms_enabled"] {
        assert_eq!(body["fields"][toggle], json!(["Required"]), "{toggle}");
    }
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn dotless_email_domain_is_rejected() {
    let app = build_test_app();

    let mut body = valid_body();
    body["email"] = json!("user@localhost");
    let response = put_json(&app.router, &settings_uri(UserId::new_v4()), &body).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(
        body["fields"]["email"],
        json!(["Please enter a valid email address"])
    );
}

#[tokio::test]
async fn invalid_email_is_rejected_without_mutation() {
    let app = build_test_app();
    let user_id = UserId::new_v4();
    put_json(&app.router, &settings_uri(user_id), &valid_body()).await;

    let mut bad = valid_body();
    bad["email"] = json!("not-an-email");
    bad["threshold"] = json!(250);
    let response = put_json(&app.router, &settings_uri(user_id), &bad).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["fields"]["email"],
        json!(["Please enter a valid email address"])
    );

    let stored = app.store.get(user_id).await.unwrap().unwrap();
    assert_eq!(stored.email, "user@example.com");
    assert_eq!(stored.threshold, 100);
}

#[tokio::test]
async fn threshold_bounds_are_enforced() {
    let app = build_test_app();

    for (threshold, status) in [
        (json!(-1), StatusCode::BAD_REQUEST),
        (json!(501), StatusCode::BAD_REQUEST),
        (json!(12.5), StatusCode::BAD_REQUEST),
        (json!(0), StatusCode::OK),
        (json!(500), StatusCode::OK),
    ] {
        let user_id = UserId::new_v4();
        let mut body = valid_body();
        body["threshold"] = threshold.clone();

        let response = put_json(&app.router, &settings_uri(user_id), &body).await;
        assert_eq!(response.status(), status, "threshold {threshold}");
        assert_eq!(
            app.store.get(user_id).await.unwrap().is_some(),
            status == StatusCode::OK
        );
    }
}

#[tokio::test]
async fn overlong_phone_is_rejected() {
    let app = build_test_app();
    let user_id = UserId::new_v4();

    let mut body = valid_body();
    body["phone"] = json!("1".repeat(21));
    let response = put_json(&app.router, &settings_uri(user_id), &body).await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(
        body["fields"]["phone"],
        json!(["Phone number must be less than 20 characters"])
    );
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = build_test_app();

    let response =
        common::send_raw(&app.router, "PUT", &settings_uri(UserId::new_v4()), "{").await;
    let body = expect_json(response, StatusCode::BAD_REQUEST).await;

    assert_eq!(body["code"], "BAD_REQUEST");
}
