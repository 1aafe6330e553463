use axum::extract::{Query, State};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use treatment_cell::handlers::{get_available, list_services};
use treatment_cell::models::AvailableQuery;
use shared_utils::test_utils::{MockStoreDocs, TestConfig};

#[tokio::test]
async fn available_removes_booked_slot_for_that_date() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::service("Cleaning", &["9am", "10am", "11am"])
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/bookings"))
        .and(query_param("date", "eq.2024-01-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::booking("Cleaning", "a@x.com", "2024-01-01", "10am")
        ])))
        .mount(&mock_server)
        .await;

    let query = Query(AvailableQuery {
        date: Some("2024-01-01".to_string()),
    });

    let result = get_available(State(state), query).await;

    let services = result.unwrap().0;
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].name, "Cleaning");
    assert_eq!(services[0].slots, vec!["9am", "11am"]);
}

#[tokio::test]
async fn available_on_a_free_date_returns_full_catalog() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::service("Cleaning", &["9am", "10am", "11am"])
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/bookings"))
        .and(query_param("date", "eq.2024-01-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let query = Query(AvailableQuery {
        date: Some("2024-01-02".to_string()),
    });

    let result = get_available(State(state), query).await;

    let services = result.unwrap().0;
    assert_eq!(services[0].slots, vec!["9am", "10am", "11am"]);
}

#[tokio::test]
async fn available_without_date_matches_no_bookings() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            MockStoreDocs::service("Cleaning", &["9am", "10am"])
        ])))
        .mount(&mock_server)
        .await;

    // An absent date queries for the empty string, which matches nothing.
    Mock::given(method("GET"))
        .and(path("/rest/v1/bookings"))
        .and(query_param("date", "eq."))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let query = Query(AvailableQuery { date: None });

    let result = get_available(State(state), query).await;

    let services = result.unwrap().0;
    assert_eq!(services[0].slots, vec!["9am", "10am"]);
}

#[tokio::test]
async fn available_propagates_store_failure() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    let query = Query(AvailableQuery {
        date: Some("2024-01-01".to_string()),
    });

    let result = get_available(State(state), query).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn list_services_projects_names() {
    let mock_server = MockServer::start().await;
    let state = TestConfig::with_store_url(&mock_server.uri()).to_state();

    Mock::given(method("GET"))
        .and(path("/rest/v1/services"))
        .and(query_param("select", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Cleaning" },
            { "name": "Whitening" }
        ])))
        .mount(&mock_server)
        .await;

    let result = list_services(State(state)).await;

    let services = result.unwrap().0;
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["name"], "Cleaning");
    assert_eq!(services[1]["name"], "Whitening");
}
