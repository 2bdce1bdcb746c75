//! CLI runner - executes commands

use crate::cli::commands::{
    BudgetsCommand, Cli, Commands, CreateBudgetArgs, NotificationArgs, OutputFormat, PagingArgs,
    SocialCommand,
};
use crate::config::ClientConfig;
use crate::confirm::{ConfirmationPolicy, Force, Prompt, WhatIf};
use crate::engine::FetchLoop;
use crate::error::{Error, Result};
use crate::model::budgets::{
    BudgetBuilder, CreateBudgetRequest, DeleteBudgetRequest, DescribeBudgetRequest,
    DescribeBudgetsRequest, DescribeNotificationsForBudgetRequest,
    DescribeSubscribersForNotificationRequest, Notification,
};
use crate::model::social::{
    DisassociateWhatsAppBusinessAccountRequest, GetLinkedWhatsAppBusinessAccountRequest,
    ListLinkedWhatsAppBusinessAccountsRequest, ListTagsForResourceRequest, TagResourceRequest,
    UntagResourceRequest,
};
use crate::pagination::{PageFetcher, Paginated, PaginationMode};
use crate::select::{Selectable, Selection};
use crate::services::{BudgetsClient, SocialMessagingClient};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
    cancel: CancellationToken,
    confirmation: Arc<dyn ConfirmationPolicy>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl Runner {
    /// Create a new runner writing to stdout
    pub fn new(cli: Cli) -> Self {
        let confirmation: Arc<dyn ConfirmationPolicy> = if cli.force {
            Arc::new(Force)
        } else if cli.what_if {
            Arc::new(WhatIf)
        } else {
            Arc::new(Prompt)
        };

        Self {
            cli,
            cancel: CancellationToken::new(),
            confirmation,
            output: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Write results somewhere other than stdout
    #[must_use]
    pub fn with_output(mut self, output: Box<dyn Write + Send>) -> Self {
        self.output = Mutex::new(output);
        self
    }

    /// Replace the confirmation policy chosen from the flags
    #[must_use]
    pub fn with_confirmation(mut self, policy: Arc<dyn ConfirmationPolicy>) -> Self {
        self.confirmation = policy;
        self
    }

    /// Token that cancels the running command
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Budgets(command) => {
                let client = BudgetsClient::from_config(config)?;
                self.budgets(&client, command).await
            }
            Commands::Social(command) => {
                let client = SocialMessagingClient::from_config(config)?;
                self.social(&client, command).await
            }
        }
    }

    /// Build the client configuration: file, then environment, then flags
    fn load_config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        let mut config = config.with_env();

        if let Some(region) = &self.cli.region {
            config.region.clone_from(region);
        }
        if let Some(url) = &self.cli.endpoint_url {
            config.endpoint_url = Some(url.clone());
            config.endpoints.clear();
        }

        config.validate()?;
        debug!(region = %config.region, "Loaded client configuration");
        Ok(config)
    }

    // ========================================================================
    // Budgets
    // ========================================================================

    async fn budgets(&self, client: &BudgetsClient, command: &BudgetsCommand) -> Result<()> {
        match command {
            BudgetsCommand::DescribeBudgets { account_id, paging } => {
                let input = json!({
                    "AccountId": account_id,
                    "MaxResults": paging.max_results,
                    "NextToken": paging.start_token(),
                });
                let request = DescribeBudgetsRequest {
                    account_id: account_id.clone(),
                    max_results: paging.max_results,
                    next_token: paging.start_token(),
                };
                self.paged(client, request, paging, &input).await
            }

            BudgetsCommand::DescribeBudget {
                account_id,
                budget_name,
            } => {
                let input = json!({"AccountId": account_id, "BudgetName": budget_name});
                let request = DescribeBudgetRequest {
                    account_id: account_id.clone(),
                    budget_name: budget_name.clone(),
                };
                self.single(&input, None, client.describe_budget(&request))
                    .await
            }

            BudgetsCommand::CreateBudget(args) => {
                let input = create_budget_input(args);
                let request = create_budget_request(args)?;
                let confirm = ("CreateBudget", args.budget_name.as_str());
                self.single(&input, Some(confirm), client.create_budget(&request))
                    .await
            }

            BudgetsCommand::DeleteBudget {
                account_id,
                budget_name,
            } => {
                let input = json!({"AccountId": account_id, "BudgetName": budget_name});
                let request = DeleteBudgetRequest {
                    account_id: account_id.clone(),
                    budget_name: budget_name.clone(),
                };
                let confirm = ("DeleteBudget", budget_name.as_str());
                self.single(&input, Some(confirm), client.delete_budget(&request))
                    .await
            }

            BudgetsCommand::DescribeNotifications {
                account_id,
                budget_name,
                paging,
            } => {
                let input = json!({
                    "AccountId": account_id,
                    "BudgetName": budget_name,
                    "MaxResults": paging.max_results,
                    "NextToken": paging.start_token(),
                });
                let request = DescribeNotificationsForBudgetRequest {
                    account_id: account_id.clone(),
                    budget_name: budget_name.clone(),
                    max_results: paging.max_results,
                    next_token: paging.start_token(),
                };
                self.paged(client, request, paging, &input).await
            }

            BudgetsCommand::DescribeSubscribers {
                account_id,
                budget_name,
                notification,
                paging,
            } => {
                let notification = to_notification(notification);
                let input = json!({
                    "AccountId": account_id,
                    "BudgetName": budget_name,
                    "Notification": notification,
                    "MaxResults": paging.max_results,
                    "NextToken": paging.start_token(),
                });
                let request = DescribeSubscribersForNotificationRequest {
                    account_id: account_id.clone(),
                    budget_name: budget_name.clone(),
                    notification,
                    max_results: paging.max_results,
                    next_token: paging.start_token(),
                };
                self.paged(client, request, paging, &input).await
            }
        }
    }

    // ========================================================================
    // Social Messaging
    // ========================================================================

    async fn social(&self, client: &SocialMessagingClient, command: &SocialCommand) -> Result<()> {
        match command {
            SocialCommand::ListLinkedAccounts { paging } => {
                let input = json!({
                    "MaxResults": paging.max_results,
                    "NextToken": paging.start_token(),
                });
                let request = ListLinkedWhatsAppBusinessAccountsRequest {
                    next_token: paging.start_token(),
                    max_results: paging.max_results,
                };
                self.paged(client, request, paging, &input).await
            }

            SocialCommand::GetLinkedAccount { id } => {
                let input = json!({"Id": id});
                let request = GetLinkedWhatsAppBusinessAccountRequest { id: id.clone() };
                self.single(
                    &input,
                    None,
                    client.get_linked_whatsapp_business_account(&request),
                )
                .await
            }

            SocialCommand::DisassociateAccount { id } => {
                let input = json!({"Id": id});
                let request = DisassociateWhatsAppBusinessAccountRequest { id: id.clone() };
                self.single(
                    &input,
                    Some(("DisassociateWhatsAppBusinessAccount", id.as_str())),
                    client.disassociate_whatsapp_business_account(&request),
                )
                .await
            }

            SocialCommand::ListTags { resource_arn } => {
                let input = json!({"ResourceArn": resource_arn});
                let request = ListTagsForResourceRequest {
                    resource_arn: resource_arn.clone(),
                };
                self.single(&input, None, client.list_tags_for_resource(&request))
                    .await
            }

            SocialCommand::TagResource { resource_arn, tags } => {
                let input = json!({"ResourceArn": resource_arn, "Tag": tags});
                let request = TagResourceRequest {
                    resource_arn: resource_arn.clone(),
                    tags: tags.clone(),
                };
                self.single(
                    &input,
                    Some(("TagResource", resource_arn.as_str())),
                    client.tag_resource(&request),
                )
                .await
            }

            SocialCommand::UntagResource {
                resource_arn,
                tag_keys,
            } => {
                let input = json!({"ResourceArn": resource_arn, "TagKey": tag_keys});
                let request = UntagResourceRequest {
                    resource_arn: resource_arn.clone(),
                    tag_keys: tag_keys.clone(),
                };
                self.single(
                    &input,
                    Some(("UntagResource", resource_arn.as_str())),
                    client.untag_resource(&request),
                )
                .await
            }
        }
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Drive a list operation through the fetch loop, printing each page
    async fn paged<R, F>(
        &self,
        fetcher: &F,
        request: R,
        paging: &PagingArgs,
        input: &Value,
    ) -> Result<()>
    where
        R: Paginated + Send + Sync,
        F: PageFetcher<R>,
        F::Payload: Selectable + 'static,
    {
        let projector = Selection::resolve::<F::Payload>(self.cli.select.as_ref(), input)?;
        let mode = paging.mode();

        let mut fetch_loop =
            FetchLoop::new(request, fetcher, mode).with_cancellation(self.cancel.clone());
        let result = fetch_loop
            .try_run(|page| self.emit(projector(&page.payload)?))
            .await;

        let stats = fetch_loop.stats();
        if let (PaginationMode::Manual, Some(token)) = (mode, &stats.unused_token) {
            info!(next_token = %token, "More results available, pass --next-token to continue");
        }
        debug!(
            pages = stats.pages_fetched,
            duration_ms = stats.duration_ms,
            state = ?fetch_loop.state(),
            "Command finished"
        );

        result
    }

    /// Run a single-call operation, asking for confirmation first when it mutates
    async fn single<T, Fut>(
        &self,
        input: &Value,
        confirm: Option<(&str, &str)>,
        call: Fut,
    ) -> Result<()>
    where
        T: Selectable + 'static,
        Fut: Future<Output = Result<T>>,
    {
        let projector = Selection::resolve::<T>(self.cli.select.as_ref(), input)?;

        if let Some((operation, target)) = confirm {
            if !self.confirm(operation, target).await? {
                return Ok(());
            }
        }

        let response = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(Error::Cancelled),
            response = call => response?,
        };
        self.emit(projector(&response)?)
    }

    /// Consult the confirmation policy; `Ok(false)` means a what-if run
    async fn confirm(&self, operation: &str, target: &str) -> Result<bool> {
        let description = format!("{operation} on target {target}");
        let policy = Arc::clone(&self.confirmation);
        let asked = description.clone();
        // The interactive prompt blocks on the terminal
        let confirmed = tokio::task::spawn_blocking(move || policy.confirm(&asked))
            .await
            .map_err(|e| Error::Other(format!("confirmation task failed: {e}")))?;
        if confirmed {
            return Ok(true);
        }
        if self.cli.what_if {
            Ok(false)
        } else {
            Err(Error::declined(description))
        }
    }

    /// Print a projected value; arrays are written one element at a time
    fn emit(&self, value: Value) -> Result<()> {
        let items = match value {
            Value::Null => return Ok(()),
            Value::Array(items) => items,
            other => vec![other],
        };

        let mut output = self
            .output
            .lock()
            .map_err(|_| Error::Other("output writer poisoned".to_string()))?;

        for item in items {
            let line = match self.cli.format {
                OutputFormat::Json => serde_json::to_string(&item)?,
                OutputFormat::Pretty => serde_json::to_string_pretty(&item)?,
            };
            writeln!(output, "{line}")?;
        }
        output.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}

fn to_notification(args: &NotificationArgs) -> Notification {
    Notification {
        notification_type: args.notification_type,
        comparison_operator: args.comparison_operator,
        threshold: args.threshold,
        threshold_type: args.threshold_type,
        notification_state: None,
    }
}

fn create_budget_input(args: &CreateBudgetArgs) -> Value {
    json!({
        "AccountId": args.account_id,
        "BudgetName": args.budget_name,
        "BudgetType": args.budget_type,
        "TimeUnit": args.time_unit,
        "LimitAmount": args.limit_amount,
        "LimitUnit": args.limit_unit,
        "ActualAmount": args.actual_amount,
        "ActualUnit": args.actual_unit,
        "ForecastedAmount": args.forecasted_amount,
        "ForecastedUnit": args.forecasted_unit,
        "Start": args.start,
        "End": args.end,
        "CostFilter": args.cost_filters.iter().cloned().collect::<HashMap<_, _>>(),
        "Notification": args.notifications,
    })
}

/// Map the flags onto the request, dropping nested objects nobody filled in
fn create_budget_request(args: &CreateBudgetArgs) -> Result<CreateBudgetRequest> {
    let mut builder = BudgetBuilder::new()
        .budget_name(Some(args.budget_name.as_str()))
        .budget_type(Some(args.budget_type))
        .time_unit(Some(args.time_unit))
        .budget_limit(|s| {
            s.amount(args.limit_amount.as_deref())
                .unit(args.limit_unit.as_deref())
        })
        .time_period(|p| p.start(args.start).end(args.end))
        .calculated_spend(|c| {
            c.actual(|s| {
                s.amount(args.actual_amount.as_deref())
                    .unit(args.actual_unit.as_deref())
            })
            .forecasted(|s| {
                s.amount(args.forecasted_amount.as_deref())
                    .unit(args.forecasted_unit.as_deref())
            })
        });

    for (key, values) in &args.cost_filters {
        builder = builder.cost_filter(key.as_str(), values.clone());
    }

    let budget = builder
        .build()?
        .ok_or_else(|| Error::invalid_parameter("Budget", "required"))?;
    let mut request = CreateBudgetRequest::new(args.account_id.as_str(), budget);
    request.notifications_with_subscribers =
        (!args.notifications.is_empty()).then(|| args.notifications.clone());
    Ok(request)
}
