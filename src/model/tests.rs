use super::budgets::*;
use super::social::*;
use crate::error::Error;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Enums
// ============================================================================

#[test_case("MONTHLY", TimeUnit::Monthly ; "wire name")]
#[test_case("monthly", TimeUnit::Monthly ; "lower case")]
#[test_case(" Annually ", TimeUnit::Annually ; "padded")]
fn test_time_unit_from_str(raw: &str, expected: TimeUnit) {
    assert_eq!(raw.parse::<TimeUnit>().unwrap(), expected);
}

#[test]
fn test_enum_accepts_dashes() {
    assert_eq!(
        "ri-utilization".parse::<BudgetType>().unwrap(),
        BudgetType::RiUtilization
    );
    assert_eq!(
        "greater-than".parse::<ComparisonOperator>().unwrap(),
        ComparisonOperator::GreaterThan
    );
}

#[test]
fn test_enum_rejects_unknown() {
    let err = "WEEKLY".parse::<TimeUnit>().unwrap_err();
    assert!(err.contains("TimeUnit"));
    assert!(err.contains("DAILY, MONTHLY, QUARTERLY, ANNUALLY"));
}

#[test]
fn test_enum_display_and_serde() {
    assert_eq!(BudgetType::SavingsPlansCoverage.to_string(), "SAVINGS_PLANS_COVERAGE");
    assert_eq!(
        serde_json::to_value(ThresholdType::AbsoluteValue).unwrap(),
        json!("ABSOLUTE_VALUE")
    );
    let state: NotificationState = serde_json::from_value(json!("ALARM")).unwrap();
    assert_eq!(state, NotificationState::Alarm);
}

// ============================================================================
// Nested builders
// ============================================================================

#[test]
fn test_spend_untouched_is_none() {
    let spend = SpendBuilder::new("BudgetLimit")
        .amount(None::<String>)
        .unit(None::<String>)
        .build()
        .unwrap();
    assert!(spend.is_none());
}

#[test]
fn test_spend_partial_names_missing_field() {
    let err = SpendBuilder::new("BudgetLimit")
        .amount(Some("100"))
        .build()
        .unwrap_err();
    match err {
        Error::InvalidParameter { parameter, .. } => assert_eq!(parameter, "BudgetLimit.Unit"),
        other => panic!("Expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_time_period_rejects_inverted_range() {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let err = TimePeriodBuilder::new()
        .start(Some(start))
        .end(Some(end))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));
}

#[test]
fn test_time_period_start_only() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let period = TimePeriodBuilder::new().start(Some(start)).build().unwrap().unwrap();
    assert_eq!(serde_json::to_value(&period).unwrap(), json!({"Start": 1704067200}));
}

#[test]
fn test_calculated_spend_empty_children_vanish() {
    let spend = CalculatedSpendBuilder::new()
        .actual(|s| s.amount(None::<String>).unit(None::<String>))
        .forecasted(|s| s)
        .build()
        .unwrap();
    assert!(spend.is_none());
}

#[test]
fn test_budget_untouched_is_none() {
    assert!(BudgetBuilder::new().build().unwrap().is_none());
}

#[test]
fn test_budget_requires_name() {
    let err = BudgetBuilder::new()
        .time_unit(Some(TimeUnit::Monthly))
        .budget_type(Some(BudgetType::Cost))
        .build()
        .unwrap_err();
    match err {
        Error::InvalidParameter { parameter, .. } => assert_eq!(parameter, "Budget.BudgetName"),
        other => panic!("Expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn test_budget_omits_empty_sub_objects() {
    let budget = BudgetBuilder::new()
        .budget_name(Some("monthly-cap"))
        .time_unit(Some(TimeUnit::Monthly))
        .budget_type(Some(BudgetType::Cost))
        .budget_limit(|s| s.amount(Some("100")).unit(Some("USD")))
        .calculated_spend(|c| c.actual(|s| s.amount(None::<String>)))
        .build()
        .unwrap()
        .unwrap();

    assert!(budget.calculated_spend.is_none());
    assert!(budget.time_period.is_none());
    assert_eq!(
        serde_json::to_value(&budget).unwrap(),
        json!({
            "BudgetName": "monthly-cap",
            "BudgetLimit": {"Amount": "100", "Unit": "USD"},
            "TimeUnit": "MONTHLY",
            "BudgetType": "COST"
        })
    );
}

#[test]
fn test_budget_keeps_partially_filled_nested_spend() {
    let budget = BudgetBuilder::new()
        .budget_name(Some("b"))
        .time_unit(Some(TimeUnit::Daily))
        .budget_type(Some(BudgetType::Usage))
        .calculated_spend(|c| c.forecasted(|s| s.amount(Some("12.5")).unit(Some("GB"))))
        .build()
        .unwrap()
        .unwrap();

    let value = serde_json::to_value(&budget).unwrap();
    assert_eq!(
        value["CalculatedSpend"],
        json!({"ForecastedSpend": {"Amount": "12.5", "Unit": "GB"}})
    );
}

#[test]
fn test_budget_cost_filters_merge() {
    let budget = BudgetBuilder::new()
        .budget_name(Some("b"))
        .time_unit(Some(TimeUnit::Monthly))
        .budget_type(Some(BudgetType::Cost))
        .cost_filter("Service", vec!["Amazon EC2".into()])
        .cost_filter("Service", vec!["Amazon S3".into()])
        .build()
        .unwrap()
        .unwrap();

    let filters = budget.cost_filters.unwrap();
    assert_eq!(filters["Service"], vec!["Amazon EC2", "Amazon S3"]);
}

// ============================================================================
// Budgets wire shapes
// ============================================================================

#[test]
fn test_describe_budgets_request_skips_absent_fields() {
    let request = DescribeBudgetsRequest::new("123456789012");
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"AccountId": "123456789012"})
    );
}

#[test]
fn test_describe_budgets_response_decodes() {
    let response: DescribeBudgetsResponse = serde_json::from_value(json!({
        "Budgets": [{
            "BudgetName": "a",
            "TimeUnit": "MONTHLY",
            "BudgetType": "COST",
            "BudgetLimit": {"Amount": "10.0", "Unit": "USD"},
            "LastUpdatedTime": 1.7040672E9
        }],
        "NextToken": "X"
    }))
    .unwrap();

    assert_eq!(response.budgets.len(), 1);
    assert_eq!(response.next_token.as_deref(), Some("X"));
    assert_eq!(
        response.budgets[0].last_updated_time,
        Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_describe_subscribers_request_shape() {
    let request = DescribeSubscribersForNotificationRequest {
        account_id: "1".into(),
        budget_name: "b".into(),
        notification: Notification {
            notification_type: NotificationType::Actual,
            comparison_operator: ComparisonOperator::GreaterThan,
            threshold: 80.0,
            threshold_type: Some(ThresholdType::Percentage),
            notification_state: None,
        },
        max_results: Some(5),
        next_token: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "AccountId": "1",
            "BudgetName": "b",
            "Notification": {
                "NotificationType": "ACTUAL",
                "ComparisonOperator": "GREATER_THAN",
                "Threshold": 80.0,
                "ThresholdType": "PERCENTAGE"
            },
            "MaxResults": 5
        })
    );
}

// ============================================================================
// Social Messaging wire shapes
// ============================================================================

#[test_case("env=prod", "env", Some("prod") ; "key and value")]
#[test_case("team=", "team", Some("") ; "empty value")]
#[test_case("flag", "flag", None ; "bare key")]
#[test_case("url=a=b", "url", Some("a=b") ; "value with equals")]
fn test_tag_parse(raw: &str, key: &str, value: Option<&str>) {
    let tag = Tag::parse(raw).unwrap();
    assert_eq!(tag.key, key);
    assert_eq!(tag.value.as_deref(), value);
}

#[test]
fn test_tag_parse_rejects_empty_key() {
    assert!(Tag::parse("=value").is_none());
    assert!(Tag::parse("").is_none());
}

#[test]
fn test_list_linked_query() {
    let mut request = ListLinkedWhatsAppBusinessAccountsRequest {
        next_token: None,
        max_results: Some(10),
    };
    assert_eq!(request.query(), vec![("maxResults", "10".to_string())]);

    request.next_token = Some(String::new());
    assert_eq!(request.query(), vec![("maxResults", "10".to_string())]);

    request.next_token = Some("abc".into());
    assert_eq!(
        request.query(),
        vec![("nextToken", "abc".to_string()), ("maxResults", "10".to_string())]
    );
}

#[test]
fn test_list_linked_response_decodes() {
    let response: ListLinkedWhatsAppBusinessAccountsResponse = serde_json::from_value(json!({
        "linkedAccounts": [{
            "arn": "arn:aws:social-messaging:us-east-1:1:waba/abc",
            "id": "waba-abc",
            "wabaId": "111",
            "registrationStatus": "COMPLETE",
            "linkDate": 1704067200,
            "wabaName": "Support",
            "eventDestinations": []
        }]
    }))
    .unwrap();

    assert!(response.next_token.is_none());
    let account = &response.linked_accounts[0];
    assert_eq!(account.id, "waba-abc");
    assert_eq!(account.registration_status, RegistrationStatus::Complete);
    assert!(account.link_date.is_some());
}

#[test]
fn test_tag_resource_body() {
    let request = TagResourceRequest {
        resource_arn: "arn:x".into(),
        tags: vec![Tag::parse("env=prod").unwrap(), Tag::parse("flag").unwrap()],
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "resourceArn": "arn:x",
            "tags": [{"key": "env", "value": "prod"}, {"key": "flag"}]
        })
    );
}
