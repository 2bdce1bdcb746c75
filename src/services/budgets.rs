//! AWS Budgets client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::model::budgets::{
    CreateBudgetRequest, CreateBudgetResponse, DeleteBudgetRequest, DeleteBudgetResponse,
    DescribeBudgetRequest, DescribeBudgetResponse, DescribeBudgetsRequest,
    DescribeBudgetsResponse, DescribeNotificationsForBudgetRequest,
    DescribeNotificationsForBudgetResponse, DescribeSubscribersForNotificationRequest,
    DescribeSubscribersForNotificationResponse,
};
use crate::pagination::{PageFetcher, PageResult};
use crate::types::Service;
use async_trait::async_trait;

/// Client for the Budgets JSON 1.1 API
#[derive(Debug, Clone)]
pub struct BudgetsClient {
    http: HttpClient,
}

impl BudgetsClient {
    /// Create a client over an existing HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create a client from configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }

    pub async fn describe_budgets(
        &self,
        request: &DescribeBudgetsRequest,
    ) -> Result<DescribeBudgetsResponse> {
        self.http
            .post_json_target(Service::Budgets, "DescribeBudgets", request)
            .await
    }

    pub async fn describe_budget(
        &self,
        request: &DescribeBudgetRequest,
    ) -> Result<DescribeBudgetResponse> {
        self.http
            .post_json_target(Service::Budgets, "DescribeBudget", request)
            .await
    }

    pub async fn create_budget(&self, request: &CreateBudgetRequest) -> Result<CreateBudgetResponse> {
        self.http
            .post_json_target(Service::Budgets, "CreateBudget", request)
            .await
    }

    pub async fn delete_budget(&self, request: &DeleteBudgetRequest) -> Result<DeleteBudgetResponse> {
        self.http
            .post_json_target(Service::Budgets, "DeleteBudget", request)
            .await
    }

    pub async fn describe_notifications_for_budget(
        &self,
        request: &DescribeNotificationsForBudgetRequest,
    ) -> Result<DescribeNotificationsForBudgetResponse> {
        self.http
            .post_json_target(Service::Budgets, "DescribeNotificationsForBudget", request)
            .await
    }

    pub async fn describe_subscribers_for_notification(
        &self,
        request: &DescribeSubscribersForNotificationRequest,
    ) -> Result<DescribeSubscribersForNotificationResponse> {
        self.http
            .post_json_target(
                Service::Budgets,
                "DescribeSubscribersForNotification",
                request,
            )
            .await
    }
}

#[async_trait]
impl PageFetcher<DescribeBudgetsRequest> for BudgetsClient {
    type Payload = DescribeBudgetsResponse;

    async fn fetch_page(
        &self,
        request: &DescribeBudgetsRequest,
    ) -> Result<PageResult<DescribeBudgetsResponse>> {
        let response = self.describe_budgets(request).await?;
        let next_token = response.next_token.clone();
        Ok(PageResult::new(response, next_token))
    }
}

#[async_trait]
impl PageFetcher<DescribeNotificationsForBudgetRequest> for BudgetsClient {
    type Payload = DescribeNotificationsForBudgetResponse;

    async fn fetch_page(
        &self,
        request: &DescribeNotificationsForBudgetRequest,
    ) -> Result<PageResult<DescribeNotificationsForBudgetResponse>> {
        let response = self.describe_notifications_for_budget(request).await?;
        let next_token = response.next_token.clone();
        Ok(PageResult::new(response, next_token))
    }
}

#[async_trait]
impl PageFetcher<DescribeSubscribersForNotificationRequest> for BudgetsClient {
    type Payload = DescribeSubscribersForNotificationResponse;

    async fn fetch_page(
        &self,
        request: &DescribeSubscribersForNotificationRequest,
    ) -> Result<PageResult<DescribeSubscribersForNotificationResponse>> {
        let response = self.describe_subscribers_for_notification(request).await?;
        let next_token = response.next_token.clone();
        Ok(PageResult::new(response, next_token))
    }
}
