use axum::extract::{Path, State};
use serde_json::json;
use wiremock::matchers::{headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_utils::jwt::validate_token;
use shared_utils::test_utils::{MockStoreDocs, TestConfig};
use user_cell::handlers::{check_admin, list_users, promote_admin, upsert_user};

#[tokio::test]
async fn upsert_user_stores_profile_and_mints_token() {
    let mock_server = MockServer::start().await;
    let config = TestConfig::with_store_url(&mock_server.uri());
    let state = config.to_state();

    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(query_param("on_conflict", "email"))
        // wiremock splits comma-separated header values, so the expected
        // `Prefer: resolution=merge-duplicates,return=representation` must be
        // given as its two comma-separated parts.
        .and(headers("Prefer", vec!["resolution=merge-duplicates", "return=representation"]))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "email": "a@x.com", "name": "Alice" }
        ])))
        .mount(&mock_server)
        .await;

    let result = upsert_user(
        State(state),
        Path("a@x.com".to_string()),
        axum::Json(json!({ "name": "Alice" })),
    )
    .await;

    let body = result.unwrap().0;
    assert_eq!(body["result"]["email"], "a@x.com");

    // The minted token must verify against the same secret and carry the
    // path email.
    let token = body["token"].as_str().unwrap();
    let decoded = validate_token(token, &config.jwt_secret).unwrap();
    assert_eq!(decoded.email, "a@x.com");
}

#[tokio::test]
async fn list_users_returns_all_documents() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::user("a@x.com", None),
            MockStoreDocs::user("admin@x.com", Some("admin")),
        ])))
        .mount(&mock_server)
        .await;

    let result = list_users(State(state)).await;

    let users = result.unwrap().0;
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn check_admin_reports_true_for_admin_role() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.admin@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::user("admin@x.com", Some("admin"))
        ])))
        .mount(&mock_server)
        .await;

    let result = check_admin(State(state), Path("admin@x.com".to_string())).await;
    assert_eq!(result.unwrap().0["admin"], true);
}

#[tokio::test]
async fn check_admin_reports_false_for_plain_user() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.a@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::user("a@x.com", None)
        ])))
        .mount(&mock_server)
        .await;

    let result = check_admin(State(state), Path("a@x.com".to_string())).await;
    assert_eq!(result.unwrap().0["admin"], false);
}

#[tokio::test]
async fn check_admin_reports_false_for_missing_user() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let result = check_admin(State(state), Path("nobody@x.com".to_string())).await;
    assert_eq!(result.unwrap().0["admin"], false);
}

#[tokio::test]
async fn promote_admin_patches_role() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/users"))
        .and(query_param("email", "eq.a@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::user("a@x.com", Some("admin"))
        ])))
        .mount(&mock_server)
        .await;

    let result = promote_admin(State(state), Path("a@x.com".to_string())).await;
    assert_eq!(result.unwrap().0["modified"], 1);
}
