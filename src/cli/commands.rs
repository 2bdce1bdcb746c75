//! CLI commands and argument parsing

use crate::model::budgets::{
    BudgetType, ComparisonOperator, Notification, NotificationType, NotificationWithSubscribers,
    Subscriber, SubscriptionType, ThresholdType, TimeUnit,
};
use crate::model::social::Tag;
use crate::pagination::{ContinuationToken, PaginationMode};
use crate::select::Selection;
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command surface for AWS Budgets and End User Messaging Social
#[derive(Parser, Debug)]
#[command(name = "aws-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// AWS region
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Endpoint for every service, overriding config and environment
    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output projection: `*`, a response field, or `^Parameter`
    #[arg(short, long, global = true)]
    pub select: Option<Selection>,

    /// Skip the confirmation prompt on mutating commands
    #[arg(long, global = true, conflicts_with = "what_if")]
    pub force: bool,

    /// Report what a mutating command would do without doing it
    #[arg(long, global = true)]
    pub what_if: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// AWS Budgets operations
    #[command(subcommand)]
    Budgets(BudgetsCommand),

    /// AWS End User Messaging Social (WhatsApp) operations
    #[command(subcommand)]
    Social(SocialCommand),
}

/// Paging flags shared by list operations
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PagingArgs {
    /// Page size requested from the service
    #[arg(long)]
    pub max_results: Option<u32>,

    /// Start from this token and return a single page
    #[arg(long)]
    pub next_token: Option<String>,

    /// Return only the first page
    #[arg(long)]
    pub no_auto_iterate: bool,
}

impl PagingArgs {
    /// Pagination mode for this invocation
    pub fn mode(&self) -> PaginationMode {
        PaginationMode::resolve(self.next_token.as_deref(), self.no_auto_iterate)
    }

    /// Token for the first request; an empty `--next-token` counts as none
    pub fn start_token(&self) -> Option<String> {
        ContinuationToken::from_option(self.next_token.clone()).map(ContinuationToken::into_inner)
    }
}

// ============================================================================
// Budgets
// ============================================================================

/// Budgets subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetsCommand {
    /// List the budgets of an account
    DescribeBudgets {
        #[arg(long)]
        account_id: String,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one budget
    DescribeBudget {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        budget_name: String,
    },

    /// Create a budget
    CreateBudget(CreateBudgetArgs),

    /// Delete a budget
    DeleteBudget {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        budget_name: String,
    },

    /// List the notifications of a budget
    DescribeNotifications {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        budget_name: String,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// List the subscribers of a notification
    DescribeSubscribers {
        #[arg(long)]
        account_id: String,

        #[arg(long)]
        budget_name: String,

        #[command(flatten)]
        notification: NotificationArgs,

        #[command(flatten)]
        paging: PagingArgs,
    },
}

/// Flags for `budgets create-budget`
#[derive(Args, Debug, Clone)]
pub struct CreateBudgetArgs {
    #[arg(long)]
    pub account_id: String,

    #[arg(long)]
    pub budget_name: String,

    /// USAGE, COST, RI_UTILIZATION, RI_COVERAGE, SAVINGS_PLANS_UTILIZATION or SAVINGS_PLANS_COVERAGE
    #[arg(long)]
    pub budget_type: BudgetType,

    /// DAILY, MONTHLY, QUARTERLY or ANNUALLY
    #[arg(long)]
    pub time_unit: TimeUnit,

    /// Budget limit amount
    #[arg(long)]
    pub limit_amount: Option<String>,

    /// Budget limit unit (USD, GB, ...)
    #[arg(long)]
    pub limit_unit: Option<String>,

    #[arg(long)]
    pub actual_amount: Option<String>,

    #[arg(long)]
    pub actual_unit: Option<String>,

    #[arg(long)]
    pub forecasted_amount: Option<String>,

    #[arg(long)]
    pub forecasted_unit: Option<String>,

    /// Period start (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub start: Option<DateTime<Utc>>,

    /// Period end (RFC 3339 or YYYY-MM-DD)
    #[arg(long, value_parser = parse_timestamp)]
    pub end: Option<DateTime<Utc>>,

    /// Cost filter as KEY=V1,V2 (repeatable)
    #[arg(long = "cost-filter", value_parser = parse_cost_filter)]
    pub cost_filters: Vec<(String, Vec<String>)>,

    /// Notification as type=ACTUAL,operator=GREATER_THAN,threshold=80[,threshold-type=PERCENTAGE],
    /// followed by one or more email=ADDRESS or sns=TOPIC_ARN (repeatable)
    #[arg(long = "notification", value_parser = parse_notification)]
    pub notifications: Vec<NotificationWithSubscribers>,
}

/// Flags identifying a budget notification
#[derive(Args, Debug, Clone)]
pub struct NotificationArgs {
    /// ACTUAL or FORECASTED
    #[arg(long)]
    pub notification_type: NotificationType,

    /// GREATER_THAN, LESS_THAN or EQUAL_TO
    #[arg(long)]
    pub comparison_operator: ComparisonOperator,

    #[arg(long)]
    pub threshold: f64,

    /// PERCENTAGE or ABSOLUTE_VALUE
    #[arg(long)]
    pub threshold_type: Option<ThresholdType>,
}

// ============================================================================
// Social Messaging
// ============================================================================

/// Social Messaging subcommands
#[derive(Subcommand, Debug)]
pub enum SocialCommand {
    /// List linked WhatsApp Business Accounts
    ListLinkedAccounts {
        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one linked WhatsApp Business Account
    GetLinkedAccount {
        #[arg(long)]
        id: String,
    },

    /// Disassociate a WhatsApp Business Account
    DisassociateAccount {
        #[arg(long)]
        id: String,
    },

    /// List the tags of a resource
    ListTags {
        #[arg(long)]
        resource_arn: String,
    },

    /// Add tags to a resource
    TagResource {
        #[arg(long)]
        resource_arn: String,

        /// Tag as KEY=VALUE (repeatable)
        #[arg(long = "tag", value_parser = parse_tag, required = true)]
        tags: Vec<Tag>,
    },

    /// Remove tags from a resource
    UntagResource {
        #[arg(long)]
        resource_arn: String,

        /// Tag key to remove (repeatable)
        #[arg(long = "tag-key", required = true)]
        tag_keys: Vec<String>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}

// ============================================================================
// Value parsers
// ============================================================================

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("invalid timestamp '{raw}', expected RFC 3339 or YYYY-MM-DD"))
}

fn parse_cost_filter(raw: &str) -> Result<(String, Vec<String>), String> {
    let (key, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid cost filter '{raw}', expected KEY=V1,V2"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid cost filter '{raw}', empty key"));
    }
    let values = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect();
    Ok((key.to_string(), values))
}

fn parse_notification(raw: &str) -> Result<NotificationWithSubscribers, String> {
    let mut notification_type = None;
    let mut comparison_operator = None;
    let mut threshold = None;
    let mut threshold_type = None;
    let mut subscribers = Vec::new();

    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| format!("invalid notification field '{part}', expected KEY=VALUE"))?;
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "type" => notification_type = Some(value.parse::<NotificationType>()?),
            "operator" => comparison_operator = Some(value.parse::<ComparisonOperator>()?),
            "threshold" => {
                threshold = Some(
                    value
                        .parse::<f64>()
                        .map_err(|_| format!("invalid threshold '{value}'"))?,
                );
            }
            "threshold-type" => threshold_type = Some(value.parse::<ThresholdType>()?),
            "email" => subscribers.push(Subscriber {
                subscription_type: SubscriptionType::Email,
                address: value.to_string(),
            }),
            "sns" => subscribers.push(Subscriber {
                subscription_type: SubscriptionType::Sns,
                address: value.to_string(),
            }),
            other => return Err(format!("unknown notification field '{other}'")),
        }
    }

    if subscribers.is_empty() {
        return Err(format!("notification '{raw}' needs at least one email= or sns= subscriber"));
    }
    Ok(NotificationWithSubscribers {
        notification: Notification {
            notification_type: notification_type.ok_or("notification is missing type=")?,
            comparison_operator: comparison_operator.ok_or("notification is missing operator=")?,
            threshold: threshold.ok_or("notification is missing threshold=")?,
            threshold_type,
            notification_state: None,
        },
        subscribers,
    })
}

fn parse_tag(raw: &str) -> Result<Tag, String> {
    Tag::parse(raw).ok_or_else(|| format!("invalid tag '{raw}', expected KEY=VALUE"))
}
