//! Tests for the service clients

use super::*;
use crate::config::ClientConfig;
use crate::engine::{collect_all, FetchLoop, LoopState};
use crate::error::Error;
use crate::model::budgets::*;
use crate::model::social::*;
use crate::pagination::{PageFetcher, PaginationMode};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TARGET: &str = "X-Amz-Target";

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder().endpoint_url(server.uri()).build()
}

fn budgets_client(server: &MockServer) -> BudgetsClient {
    BudgetsClient::from_config(config_for(server)).unwrap()
}

fn social_client(server: &MockServer) -> SocialMessagingClient {
    SocialMessagingClient::from_config(config_for(server)).unwrap()
}

fn budget_json(name: &str) -> serde_json::Value {
    json!({"BudgetName": name, "TimeUnit": "MONTHLY", "BudgetType": "COST"})
}

// ============================================================================
// Budgets
// ============================================================================

#[tokio::test]
async fn test_describe_budgets_page() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(TARGET, "AWSBudgetServiceGateway.DescribeBudgets"))
        .and(body_json(json!({"AccountId": "111122223333", "MaxResults": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Budgets": [budget_json("a"), budget_json("b")],
            "NextToken": "X"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = budgets_client(&server);
    let mut request = DescribeBudgetsRequest::new("111122223333");
    request.max_results = Some(2);

    let page = client.fetch_page(&request).await.unwrap();
    assert_eq!(page.next_token.as_deref(), Some("X"));
    let names: Vec<_> = page.payload.budgets.iter().map(|b| b.budget_name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[tokio::test]
async fn test_describe_budgets_follows_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({"AccountId": "1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Budgets": [budget_json("a")],
            "NextToken": "X"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_json(json!({"AccountId": "1", "NextToken": "X"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Budgets": [budget_json("b")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = budgets_client(&server);
    let pages = collect_all(DescribeBudgetsRequest::new("1"), &client, PaginationMode::Auto)
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].budgets[0].budget_name, "b");
}

#[tokio::test]
async fn test_describe_budget_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(TARGET, "AWSBudgetServiceGateway.DescribeBudget"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "NotFoundException",
            "Message": "Unable to get budget: missing - the budget doesn't exist."
        })))
        .mount(&server)
        .await;

    let client = budgets_client(&server);
    let err = client
        .describe_budget(&DescribeBudgetRequest {
            account_id: "1".into(),
            budget_name: "missing".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.service_code(), Some("NotFoundException"));
}

#[tokio::test]
async fn test_create_budget_sends_nested_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(TARGET, "AWSBudgetServiceGateway.CreateBudget"))
        .and(body_json(json!({
            "AccountId": "1",
            "Budget": {
                "BudgetName": "cap",
                "BudgetLimit": {"Amount": "50", "Unit": "USD"},
                "TimeUnit": "MONTHLY",
                "BudgetType": "COST"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let budget = BudgetBuilder::new()
        .budget_name(Some("cap"))
        .time_unit(Some(TimeUnit::Monthly))
        .budget_type(Some(BudgetType::Cost))
        .budget_limit(|s| s.amount(Some("50")).unit(Some("USD")))
        .calculated_spend(|c| c)
        .build()
        .unwrap()
        .unwrap();

    let client = budgets_client(&server);
    client
        .create_budget(&CreateBudgetRequest::new("1", budget))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_budget_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(TARGET, "AWSBudgetServiceGateway.DeleteBudget"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = budgets_client(&server);
    let response = client
        .delete_budget(&DeleteBudgetRequest {
            account_id: "1".into(),
            budget_name: "cap".into(),
        })
        .await
        .unwrap();
    assert_eq!(response, DeleteBudgetResponse {});
}

#[tokio::test]
async fn test_describe_notifications_manual_mode() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(TARGET, "AWSBudgetServiceGateway.DescribeNotificationsForBudget"))
        .and(body_partial_json(json!({"NextToken": "start"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Notifications": [{
                "NotificationType": "ACTUAL",
                "ComparisonOperator": "GREATER_THAN",
                "Threshold": 80.0,
                "ThresholdType": "PERCENTAGE",
                "NotificationState": "OK"
            }],
            "NextToken": "more"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = budgets_client(&server);
    let request = DescribeNotificationsForBudgetRequest {
        account_id: "1".into(),
        budget_name: "cap".into(),
        max_results: None,
        next_token: Some("start".into()),
    };
    let mode = PaginationMode::resolve(request.next_token.as_deref(), false);

    let mut fetch_loop = FetchLoop::new(request, &client, mode);
    let mut seen = Vec::new();
    fetch_loop
        .run(|page| seen.extend(page.payload.notifications))
        .await
        .unwrap();

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].notification_state, Some(NotificationState::Ok));
    assert_eq!(fetch_loop.state(), LoopState::Done);
    assert_eq!(
        fetch_loop.stats().unused_token.as_ref().map(|t| t.as_str()),
        Some("more")
    );
}

#[tokio::test]
async fn test_describe_subscribers_stops_on_empty_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(TARGET, "AWSBudgetServiceGateway.DescribeSubscribersForNotification"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Subscribers": [{"SubscriptionType": "EMAIL", "Address": "ops@example.com"}],
            "NextToken": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = budgets_client(&server);
    let request = DescribeSubscribersForNotificationRequest {
        account_id: "1".into(),
        budget_name: "cap".into(),
        notification: Notification {
            notification_type: NotificationType::Actual,
            comparison_operator: ComparisonOperator::GreaterThan,
            threshold: 80.0,
            threshold_type: None,
            notification_state: None,
        },
        max_results: None,
        next_token: None,
    };

    let pages = collect_all(request, &client, PaginationMode::Auto).await.unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].subscribers[0].subscription_type, SubscriptionType::Email);
}

// ============================================================================
// Social Messaging
// ============================================================================

fn linked_account(id: &str) -> serde_json::Value {
    json!({
        "arn": format!("arn:aws:social-messaging:us-east-1:1:waba/{id}"),
        "id": id,
        "wabaId": "111",
        "registrationStatus": "COMPLETE",
        "wabaName": "Support"
    })
}

#[tokio::test]
async fn test_list_linked_accounts_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/whatsapp/waba/list"))
        .and(query_param("nextToken", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "linkedAccounts": [linked_account("waba-2")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/whatsapp/waba/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "linkedAccounts": [linked_account("waba-1")],
            "nextToken": "p2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = social_client(&server);
    let pages = collect_all(
        ListLinkedWhatsAppBusinessAccountsRequest::default(),
        &client,
        PaginationMode::Auto,
    )
    .await
    .unwrap();

    let ids: Vec<_> = pages
        .iter()
        .flat_map(|p| p.linked_accounts.iter().map(|a| a.id.as_str()))
        .collect();
    assert_eq!(ids, vec!["waba-1", "waba-2"]);
}

#[tokio::test]
async fn test_get_linked_account() {
    let server = MockServer::start().await;

    let mut account = linked_account("waba-1");
    account["phoneNumbers"] = json!([]);

    Mock::given(method("GET"))
        .and(path("/v1/whatsapp/waba/details"))
        .and(query_param("id", "waba-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"account": account})))
        .mount(&server)
        .await;

    let client = social_client(&server);
    let response = client
        .get_linked_whatsapp_business_account(&GetLinkedWhatsAppBusinessAccountRequest {
            id: "waba-1".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.account.unwrap().waba_name, "Support");
}

#[tokio::test]
async fn test_disassociate_uses_delete() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/whatsapp/waba/disassociate"))
        .and(query_param("id", "waba-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = social_client(&server);
    client
        .disassociate_whatsapp_business_account(&DisassociateWhatsAppBusinessAccountRequest {
            id: "waba-1".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_tagging_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tags/tag-resource"))
        .and(body_json(json!({
            "resourceArn": "arn:x",
            "tags": [{"key": "env", "value": "prod"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/tags/list"))
        .and(query_param("resourceArn", "arn:x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "statusCode": 200,
            "tags": [{"key": "env", "value": "prod"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/tags/untag-resource"))
        .and(body_json(json!({"resourceArn": "arn:x", "tagKeys": ["env"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"statusCode": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let client = social_client(&server);
    let tagged = client
        .tag_resource(&TagResourceRequest {
            resource_arn: "arn:x".into(),
            tags: vec![Tag::parse("env=prod").unwrap()],
        })
        .await
        .unwrap();
    assert_eq!(tagged.status_code, Some(200));

    let listed = client
        .list_tags_for_resource(&ListTagsForResourceRequest {
            resource_arn: "arn:x".into(),
        })
        .await
        .unwrap();
    assert_eq!(listed.tags[0].key, "env");

    client
        .untag_resource(&UntagResourceRequest {
            resource_arn: "arn:x".into(),
            tag_keys: vec!["env".into()],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_social_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/whatsapp/waba/list"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("x-amzn-ErrorType", "AccessDeniedException")
                .set_body_json(json!({"message": "not authorized"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = social_client(&server);
    let err = collect_all(
        ListLinkedWhatsAppBusinessAccountsRequest::default(),
        &client,
        PaginationMode::Auto,
    )
    .await
    .unwrap_err();

    match err {
        Error::Service { code, status, .. } => {
            assert_eq!(code, "AccessDeniedException");
            assert_eq!(status, 403);
        }
        other => panic!("Expected Service error, got {other:?}"),
    }
}
