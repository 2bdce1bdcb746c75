//! AWS Budgets models
//!
//! AWS JSON 1.1 shapes; every field is PascalCase on the wire.

use super::epoch;
use crate::error::{Error, Result};
use crate::pagination::Paginated;
use crate::select::Selectable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Enums
// ============================================================================

wire_enum! {
    /// Length of time until a budget resets
    pub enum TimeUnit {
        Daily => "DAILY",
        Monthly => "MONTHLY",
        Quarterly => "QUARTERLY",
        Annually => "ANNUALLY",
    }
}

wire_enum! {
    /// What a budget tracks
    pub enum BudgetType {
        Usage => "USAGE",
        Cost => "COST",
        RiUtilization => "RI_UTILIZATION",
        RiCoverage => "RI_COVERAGE",
        SavingsPlansUtilization => "SAVINGS_PLANS_UTILIZATION",
        SavingsPlansCoverage => "SAVINGS_PLANS_COVERAGE",
    }
}

wire_enum! {
    /// Whether a notification fires on actual or forecasted spend
    pub enum NotificationType {
        Actual => "ACTUAL",
        Forecasted => "FORECASTED",
    }
}

wire_enum! {
    /// Comparison applied to the notification threshold
    pub enum ComparisonOperator {
        GreaterThan => "GREATER_THAN",
        LessThan => "LESS_THAN",
        EqualTo => "EQUAL_TO",
    }
}

wire_enum! {
    /// How the notification threshold is expressed
    pub enum ThresholdType {
        Percentage => "PERCENTAGE",
        AbsoluteValue => "ABSOLUTE_VALUE",
    }
}

wire_enum! {
    /// Whether a notification is currently in alarm
    pub enum NotificationState {
        Ok => "OK",
        Alarm => "ALARM",
    }
}

wire_enum! {
    /// Delivery channel for a subscriber
    pub enum SubscriptionType {
        Sns => "SNS",
        Email => "EMAIL",
    }
}

// ============================================================================
// Spend
// ============================================================================

/// An amount of cost or usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Spend {
    /// Decimal amount, kept as the service's string representation
    pub amount: String,
    /// Unit of measure (`USD`, `GBP`, `GB`, ...)
    pub unit: String,
}

/// Builder for `Spend`
#[derive(Debug, Clone, Default)]
pub struct SpendBuilder {
    parameter: &'static str,
    amount: Option<String>,
    unit: Option<String>,
}

impl SpendBuilder {
    /// Create a builder; `parameter` names the spend in error messages
    pub fn new(parameter: &'static str) -> Self {
        Self {
            parameter,
            ..Default::default()
        }
    }

    /// Set the amount
    #[must_use]
    pub fn amount(mut self, amount: Option<impl Into<String>>) -> Self {
        self.amount = amount.map(Into::into);
        self
    }

    /// Set the unit
    #[must_use]
    pub fn unit(mut self, unit: Option<impl Into<String>>) -> Self {
        self.unit = unit.map(Into::into);
        self
    }

    /// `None` when neither field was set; both are required otherwise
    pub fn build(self) -> Result<Option<Spend>> {
        match (self.amount, self.unit) {
            (None, None) => Ok(None),
            (Some(amount), Some(unit)) => Ok(Some(Spend { amount, unit })),
            (Some(_), None) => Err(Error::invalid_parameter(
                format!("{}.Unit", self.parameter),
                "required when an amount is given",
            )),
            (None, Some(_)) => Err(Error::invalid_parameter(
                format!("{}.Amount", self.parameter),
                "required when a unit is given",
            )),
        }
    }
}

// ============================================================================
// TimePeriod
// ============================================================================

/// Period covered by a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimePeriod {
    /// Start of the period
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// End of the period
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

/// Builder for `TimePeriod`
#[derive(Debug, Clone, Default)]
pub struct TimePeriodBuilder {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl TimePeriodBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start
    #[must_use]
    pub fn start(mut self, start: Option<DateTime<Utc>>) -> Self {
        self.start = start;
        self
    }

    /// Set the end
    #[must_use]
    pub fn end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }

    /// `None` when neither bound was set
    pub fn build(self) -> Result<Option<TimePeriod>> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end < start {
                return Err(Error::invalid_parameter(
                    "TimePeriod.End",
                    "must not be before TimePeriod.Start",
                ));
            }
        }
        if self.start.is_none() && self.end.is_none() {
            return Ok(None);
        }
        Ok(Some(TimePeriod {
            start: self.start,
            end: self.end,
        }))
    }
}

// ============================================================================
// CalculatedSpend
// ============================================================================

/// Actual and forecasted spend for a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculatedSpend {
    /// Spend so far in the period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_spend: Option<Spend>,
    /// Projected spend for the period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasted_spend: Option<Spend>,
}

/// Builder for `CalculatedSpend`
#[derive(Debug, Clone)]
pub struct CalculatedSpendBuilder {
    actual: SpendBuilder,
    forecasted: SpendBuilder,
}

impl Default for CalculatedSpendBuilder {
    fn default() -> Self {
        Self {
            actual: SpendBuilder::new("CalculatedSpend.ActualSpend"),
            forecasted: SpendBuilder::new("CalculatedSpend.ForecastedSpend"),
        }
    }
}

impl CalculatedSpendBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the actual spend
    #[must_use]
    pub fn actual(mut self, f: impl FnOnce(SpendBuilder) -> SpendBuilder) -> Self {
        self.actual = f(self.actual);
        self
    }

    /// Configure the forecasted spend
    #[must_use]
    pub fn forecasted(mut self, f: impl FnOnce(SpendBuilder) -> SpendBuilder) -> Self {
        self.forecasted = f(self.forecasted);
        self
    }

    /// `None` when both spends are empty
    pub fn build(self) -> Result<Option<CalculatedSpend>> {
        let actual_spend = self.actual.build()?;
        let forecasted_spend = self.forecasted.build()?;
        if actual_spend.is_none() && forecasted_spend.is_none() {
            return Ok(None);
        }
        Ok(Some(CalculatedSpend {
            actual_spend,
            forecasted_spend,
        }))
    }
}

// ============================================================================
// Budget
// ============================================================================

/// A cost or usage budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Budget {
    pub budget_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_limit: Option<Spend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_filters: Option<BTreeMap<String, Vec<String>>>,
    pub time_unit: TimeUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_period: Option<TimePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_spend: Option<CalculatedSpend>,
    pub budget_type: BudgetType,
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<DateTime<Utc>>,
}

/// Builder for `Budget`, composing the nested builders
#[derive(Debug, Clone)]
pub struct BudgetBuilder {
    budget_name: Option<String>,
    time_unit: Option<TimeUnit>,
    budget_type: Option<BudgetType>,
    budget_limit: SpendBuilder,
    time_period: TimePeriodBuilder,
    calculated_spend: CalculatedSpendBuilder,
    cost_filters: BTreeMap<String, Vec<String>>,
}

impl Default for BudgetBuilder {
    fn default() -> Self {
        Self {
            budget_name: None,
            time_unit: None,
            budget_type: None,
            budget_limit: SpendBuilder::new("BudgetLimit"),
            time_period: TimePeriodBuilder::new(),
            calculated_spend: CalculatedSpendBuilder::new(),
            cost_filters: BTreeMap::new(),
        }
    }
}

impl BudgetBuilder {
    /// Create a builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the budget name
    #[must_use]
    pub fn budget_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.budget_name = name.map(Into::into);
        self
    }

    /// Set the time unit
    #[must_use]
    pub fn time_unit(mut self, unit: Option<TimeUnit>) -> Self {
        self.time_unit = unit;
        self
    }

    /// Set the budget type
    #[must_use]
    pub fn budget_type(mut self, budget_type: Option<BudgetType>) -> Self {
        self.budget_type = budget_type;
        self
    }

    /// Configure the budget limit
    #[must_use]
    pub fn budget_limit(mut self, f: impl FnOnce(SpendBuilder) -> SpendBuilder) -> Self {
        self.budget_limit = f(self.budget_limit);
        self
    }

    /// Configure the time period
    #[must_use]
    pub fn time_period(mut self, f: impl FnOnce(TimePeriodBuilder) -> TimePeriodBuilder) -> Self {
        self.time_period = f(self.time_period);
        self
    }

    /// Configure the calculated spend
    #[must_use]
    pub fn calculated_spend(
        mut self,
        f: impl FnOnce(CalculatedSpendBuilder) -> CalculatedSpendBuilder,
    ) -> Self {
        self.calculated_spend = f(self.calculated_spend);
        self
    }

    /// Add values to a cost filter
    #[must_use]
    pub fn cost_filter(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.cost_filters.entry(key.into()).or_default().extend(values);
        self
    }

    /// `None` when nothing at all was set.
    ///
    /// Otherwise name, time unit and type are required.
    pub fn build(self) -> Result<Option<Budget>> {
        let budget_limit = self.budget_limit.build()?;
        let time_period = self.time_period.build()?;
        let calculated_spend = self.calculated_spend.build()?;
        let cost_filters = (!self.cost_filters.is_empty()).then_some(self.cost_filters);

        let untouched = self.budget_name.is_none()
            && self.time_unit.is_none()
            && self.budget_type.is_none()
            && budget_limit.is_none()
            && time_period.is_none()
            && calculated_spend.is_none()
            && cost_filters.is_none();
        if untouched {
            return Ok(None);
        }

        let budget_name = self
            .budget_name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::invalid_parameter("Budget.BudgetName", "required"))?;
        let time_unit = self
            .time_unit
            .ok_or_else(|| Error::invalid_parameter("Budget.TimeUnit", "required"))?;
        let budget_type = self
            .budget_type
            .ok_or_else(|| Error::invalid_parameter("Budget.BudgetType", "required"))?;

        Ok(Some(Budget {
            budget_name,
            budget_limit,
            cost_filters,
            time_unit,
            time_period,
            calculated_spend,
            budget_type,
            last_updated_time: None,
        }))
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// A budget notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Notification {
    pub notification_type: NotificationType,
    pub comparison_operator: ComparisonOperator,
    pub threshold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_type: Option<ThresholdType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_state: Option<NotificationState>,
}

/// Recipient of a budget notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subscriber {
    pub subscription_type: SubscriptionType,
    pub address: String,
}

/// A notification with its subscribers, as sent on budget creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationWithSubscribers {
    pub notification: Notification,
    pub subscribers: Vec<Subscriber>,
}

// ============================================================================
// DescribeBudgets
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBudgetsRequest {
    pub account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeBudgetsRequest {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

impl Paginated for DescribeBudgetsRequest {
    fn continuation_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_continuation_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBudgetsResponse {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Selectable for DescribeBudgetsResponse {
    const FIELDS: &'static [&'static str] = &["Budgets", "NextToken"];
    const DEFAULT_FIELD: Option<&'static str> = Some("Budgets");
}

// ============================================================================
// DescribeBudget
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBudgetRequest {
    pub account_id: String,
    pub budget_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBudgetResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

impl Selectable for DescribeBudgetResponse {
    const FIELDS: &'static [&'static str] = &["Budget"];
    const DEFAULT_FIELD: Option<&'static str> = Some("Budget");
}

// ============================================================================
// CreateBudget / DeleteBudget
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBudgetRequest {
    pub account_id: String,
    pub budget: Budget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications_with_subscribers: Option<Vec<NotificationWithSubscribers>>,
}

impl CreateBudgetRequest {
    pub fn new(account_id: impl Into<String>, budget: Budget) -> Self {
        Self {
            account_id: account_id.into(),
            budget,
            notifications_with_subscribers: None,
        }
    }
}

/// Empty output shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBudgetResponse {}

impl Selectable for CreateBudgetResponse {
    const FIELDS: &'static [&'static str] = &[];
    const DEFAULT_FIELD: Option<&'static str> = None;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteBudgetRequest {
    pub account_id: String,
    pub budget_name: String,
}

/// Empty output shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBudgetResponse {}

impl Selectable for DeleteBudgetResponse {
    const FIELDS: &'static [&'static str] = &[];
    const DEFAULT_FIELD: Option<&'static str> = None;
}

// ============================================================================
// DescribeNotificationsForBudget
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNotificationsForBudgetRequest {
    pub account_id: String,
    pub budget_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Paginated for DescribeNotificationsForBudgetRequest {
    fn continuation_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_continuation_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeNotificationsForBudgetResponse {
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Selectable for DescribeNotificationsForBudgetResponse {
    const FIELDS: &'static [&'static str] = &["Notifications", "NextToken"];
    const DEFAULT_FIELD: Option<&'static str> = Some("Notifications");
}

// ============================================================================
// DescribeSubscribersForNotification
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubscribersForNotificationRequest {
    pub account_id: String,
    pub budget_name: String,
    pub notification: Notification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Paginated for DescribeSubscribersForNotificationRequest {
    fn continuation_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_continuation_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubscribersForNotificationResponse {
    #[serde(default)]
    pub subscribers: Vec<Subscriber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Selectable for DescribeSubscribersForNotificationResponse {
    const FIELDS: &'static [&'static str] = &["Subscribers", "NextToken"];
    const DEFAULT_FIELD: Option<&'static str> = Some("Subscribers");
}
