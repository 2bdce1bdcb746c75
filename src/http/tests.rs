//! Tests for the HTTP client module

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::Service;
use reqwest::Method;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .endpoint_url(server.uri())
        .header("X-Test", "yes")
        .build();
    HttpClient::new(config).unwrap()
}

#[tokio::test]
async fn test_post_json_target() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("X-Amz-Target", "AWSBudgetServiceGateway.DescribeBudgets"))
        .and(header("content-type", AMZ_JSON_1_1))
        .and(header("X-Test", "yes"))
        .and(body_json(json!({"AccountId": "111122223333"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Budgets": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client
        .post_json_target(
            Service::Budgets,
            "DescribeBudgets",
            &json!({"AccountId": "111122223333"}),
        )
        .await
        .unwrap();

    assert_eq!(body, json!({"Budgets": []}));
}

#[tokio::test]
async fn test_json_target_rejected_for_rest_service() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .post_json_target::<_, Value>(Service::SocialMessaging, "ListTagsForResource", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_rest_json_get_with_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/whatsapp/waba/list"))
        .and(query_param("nextToken", "abc"))
        .and(query_param("maxResults", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "linkedAccounts": [],
            "nextToken": "def"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client
        .rest_json(
            Service::SocialMessaging,
            "ListLinkedWhatsAppBusinessAccounts",
            Method::GET,
            "/v1/whatsapp/waba/list",
            &[("nextToken", "abc".to_string()), ("maxResults", "5".to_string())],
            None,
        )
        .await
        .unwrap();

    assert_eq!(body["nextToken"], "def");
}

#[tokio::test]
async fn test_empty_success_body_decodes_as_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/whatsapp/waba/disassociate"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body: Value = client
        .rest_json(
            Service::SocialMessaging,
            "DisassociateWhatsAppBusinessAccount",
            Method::DELETE,
            "v1/whatsapp/waba/disassociate",
            &[("id", "waba-1".to_string())],
            None,
        )
        .await
        .unwrap();

    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn test_error_body_becomes_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "com.amazonaws.budgets#NotFoundException",
            "Message": "Budget not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .post_json_target::<_, Value>(Service::Budgets, "DescribeBudget", &json!({}))
        .await
        .unwrap_err();

    match err {
        Error::Service {
            operation,
            status,
            code,
            message,
        } => {
            assert_eq!(operation, "DescribeBudget");
            assert_eq!(status, 400);
            assert_eq!(code, "NotFoundException");
            assert_eq!(message, "Budget not found");
        }
        other => panic!("Expected Service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/tags/list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream failure"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .rest_json::<Value>(
            Service::SocialMessaging,
            "ListTagsForResource",
            Method::GET,
            "/v1/tags/list",
            &[],
            None,
        )
        .await
        .unwrap_err();

    assert_eq!(err.service_code(), Some("UnknownError"));
    assert!(err.to_string().contains("upstream failure"));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .endpoint_url(server.uri())
        .timeout(Duration::from_secs(1))
        .build();
    let client = HttpClient::new(config).unwrap();

    let err = client
        .post_json_target::<_, Value>(Service::Budgets, "DescribeBudgets", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 1000 }));
}
