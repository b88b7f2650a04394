//! Integration tests for the per-endpoint operations.
//!
//! Each test drives one or more operations against a mock server and checks
//! the method, path and body that reach the wire.

use ecomail_api::{
    ApiKey, ApiResult, BaseUrl, EcomailClient, EcomailConfig, Endpoint, HttpMethod, QueryParams,
    QueryValue,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> EcomailClient {
    let config = EcomailConfig::builder()
        .api_key(ApiKey::new("abc").unwrap())
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    EcomailClient::new(config).unwrap()
}

async fn mount_ok(server: &MockServer, http_method: &str, route: &str) {
    Mock::given(method(http_method))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(server)
        .await;
}

fn request_body(request: &wiremock::Request) -> Value {
    serde_json::from_slice(&request.body).unwrap()
}

// ============================================================================
// Lists and Subscribers
// ============================================================================

#[tokio::test]
async fn test_add_subscriber_posts_to_list_subscribe() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/lists/LIST1/subscribe"))
        .and(body_json(json!({"email": "x@y.z"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = create_test_client(&mock_server)
        .add_subscriber("LIST1", &json!({"email": "x@y.z"}))
        .await
        .unwrap();

    assert!(!result.is_error());
}

#[tokio::test]
async fn test_subscriber_email_is_percent_encoded_in_path() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/lists/1/subscriber/jan%40example.cz").await;

    create_test_client(&mock_server)
        .get_subscriber("1", "jan@example.cz")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_identifier_with_slash_stays_in_one_segment() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/template/a%2Fb").await;

    create_test_client(&mock_server)
        .get_template("a/b")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_subscriber_sends_delete_with_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/lists/2/unsubscribe"))
        .and(body_json(json!({"email": "jan@example.cz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    create_test_client(&mock_server)
        .remove_subscriber("2", &json!({"email": "jan@example.cz"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_subscriber_uses_put() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "PUT", "/lists/2/update-subscriber").await;

    create_test_client(&mock_server)
        .update_subscriber("2", &json!({"email": "jan@example.cz", "subscriber_data": {}}))
        .await
        .unwrap();
}

// ============================================================================
// Empty-Body Deletes
// ============================================================================

#[tokio::test]
async fn test_bodyless_deletes_send_empty_object() {
    let mock_server = MockServer::start().await;

    for route in [
        "/subscribers/jan%40example.cz/delete",
        "/domains/9",
        "/tracker/transaction/T-1/delete",
        "/account/settings/webhook",
    ] {
        Mock::given(method("DELETE"))
            .and(path(route))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = create_test_client(&mock_server);
    client.delete_subscriber("jan@example.cz").await.unwrap();
    client.delete_domain("9").await.unwrap();
    client.delete_transaction("T-1").await.unwrap();
    let result = client.delete_webhook().await.unwrap();

    // 204 carries no body, which is not a JSON document
    assert_eq!(result, ApiResult::Text(String::new()));
}

// ============================================================================
// Campaigns, Automations and Search
// ============================================================================

#[tokio::test]
async fn test_list_campaigns_sends_filters_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/campaigns"))
        .and(query_param("filters", "sent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    create_test_client(&mock_server)
        .list_campaigns(Some("sent"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_campaigns_without_filters_has_empty_query() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/campaigns").await;

    create_test_client(&mock_server)
        .list_campaigns(None)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query().unwrap_or_default(), "");
}

#[tokio::test]
async fn test_pipeline_stats_for_emails_sends_body_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pipelines/4/stats-detail"))
        .and(query_param("page", "3"))
        .and(body_json(json!({"emails": ["a@b.com"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut query = QueryParams::new();
    query.insert("page".to_string(), QueryValue::from(3));

    create_test_client(&mock_server)
        .get_pipeline_stats_for_emails("4", &json!({"emails": ["a@b.com"]}), Some(query))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_search_wraps_text_in_query_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"query": "jan@example.cz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    create_test_client(&mock_server)
        .search("jan@example.cz")
        .await
        .unwrap();
}

// ============================================================================
// Derived Clients
// ============================================================================

#[tokio::test]
async fn test_page_applies_only_to_derived_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lists/1/subscribers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    client.page(2).get_subscribers("1").await.unwrap();
    client.get_subscribers("1").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=2"));
    assert_eq!(requests[1].url.query().unwrap_or_default(), "");
}

#[tokio::test]
async fn test_default_query_is_sent_to_every_endpoint() {
    let mock_server = MockServer::start().await;
    mount_ok(&mock_server, "GET", "/domains").await;

    create_test_client(&mock_server)
        .with_query("per_page", Some(QueryValue::Int(50)))
        .list_domains()
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("per_page=50"));
}

// ============================================================================
// Generic Dispatch
// ============================================================================

#[tokio::test]
async fn test_every_endpoint_reaches_its_route() {
    let mock_server = MockServer::start().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let data = json!({"x": 1});

    for &endpoint in Endpoint::ALL {
        let descriptor = endpoint.descriptor();
        let ids: Vec<&str> = descriptor.ids.iter().map(|_| "ID").collect();

        let result = client
            .call(endpoint, &ids, Some(&data), None)
            .await
            .unwrap();
        assert!(!result.is_error(), "{} failed", descriptor.name);
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), Endpoint::ALL.len());

    for (endpoint, request) in Endpoint::ALL.iter().zip(&requests) {
        let descriptor = endpoint.descriptor();
        let ids: Vec<&str> = descriptor.ids.iter().map(|_| "ID").collect();

        assert_eq!(
            request.url.path(),
            format!("/{}", descriptor.resolve_path(&ids).unwrap())
        );
        assert_eq!(
            request.method.to_string().to_lowercase(),
            descriptor.http_method.to_string()
        );
        if descriptor.http_method == HttpMethod::Get {
            assert!(request.body.is_empty(), "{} sent a body", descriptor.name);
        } else {
            assert_eq!(request_body(request), data, "{}", descriptor.name);
        }
    }
}
