//! AWS End User Messaging Social client

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::model::social::{
    DisassociateWhatsAppBusinessAccountRequest, DisassociateWhatsAppBusinessAccountResponse,
    GetLinkedWhatsAppBusinessAccountRequest, GetLinkedWhatsAppBusinessAccountResponse,
    ListLinkedWhatsAppBusinessAccountsRequest, ListLinkedWhatsAppBusinessAccountsResponse,
    ListTagsForResourceRequest, ListTagsForResourceResponse, TagResourceRequest,
    TagResourceResponse, UntagResourceRequest, UntagResourceResponse,
};
use crate::pagination::{PageFetcher, PageResult};
use crate::types::Service;
use async_trait::async_trait;
use reqwest::Method;

/// Client for the Social Messaging REST-JSON API
#[derive(Debug, Clone)]
pub struct SocialMessagingClient {
    http: HttpClient,
}

impl SocialMessagingClient {
    /// Create a client over an existing HTTP client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create a client from configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpClient::new(config)?))
    }

    pub async fn list_linked_whatsapp_business_accounts(
        &self,
        request: &ListLinkedWhatsAppBusinessAccountsRequest,
    ) -> Result<ListLinkedWhatsAppBusinessAccountsResponse> {
        self.http
            .rest_json(
                Service::SocialMessaging,
                "ListLinkedWhatsAppBusinessAccounts",
                Method::GET,
                "/v1/whatsapp/waba/list",
                &request.query(),
                None,
            )
            .await
    }

    pub async fn get_linked_whatsapp_business_account(
        &self,
        request: &GetLinkedWhatsAppBusinessAccountRequest,
    ) -> Result<GetLinkedWhatsAppBusinessAccountResponse> {
        self.http
            .rest_json(
                Service::SocialMessaging,
                "GetLinkedWhatsAppBusinessAccount",
                Method::GET,
                "/v1/whatsapp/waba/details",
                &[("id", request.id.clone())],
                None,
            )
            .await
    }

    pub async fn disassociate_whatsapp_business_account(
        &self,
        request: &DisassociateWhatsAppBusinessAccountRequest,
    ) -> Result<DisassociateWhatsAppBusinessAccountResponse> {
        self.http
            .rest_json(
                Service::SocialMessaging,
                "DisassociateWhatsAppBusinessAccount",
                Method::DELETE,
                "/v1/whatsapp/waba/disassociate",
                &[("id", request.id.clone())],
                None,
            )
            .await
    }

    pub async fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResponse> {
        self.http
            .rest_json(
                Service::SocialMessaging,
                "ListTagsForResource",
                Method::GET,
                "/v1/tags/list",
                &[("resourceArn", request.resource_arn.clone())],
                None,
            )
            .await
    }

    pub async fn tag_resource(&self, request: &TagResourceRequest) -> Result<TagResourceResponse> {
        let body = serde_json::to_value(request)?;
        self.http
            .rest_json(
                Service::SocialMessaging,
                "TagResource",
                Method::POST,
                "/v1/tags/tag-resource",
                &[],
                Some(&body),
            )
            .await
    }

    pub async fn untag_resource(
        &self,
        request: &UntagResourceRequest,
    ) -> Result<UntagResourceResponse> {
        let body = serde_json::to_value(request)?;
        self.http
            .rest_json(
                Service::SocialMessaging,
                "UntagResource",
                Method::POST,
                "/v1/tags/untag-resource",
                &[],
                Some(&body),
            )
            .await
    }
}

#[async_trait]
impl PageFetcher<ListLinkedWhatsAppBusinessAccountsRequest> for SocialMessagingClient {
    type Payload = ListLinkedWhatsAppBusinessAccountsResponse;

    async fn fetch_page(
        &self,
        request: &ListLinkedWhatsAppBusinessAccountsRequest,
    ) -> Result<PageResult<ListLinkedWhatsAppBusinessAccountsResponse>> {
        let response = self.list_linked_whatsapp_business_accounts(request).await?;
        let next_token = response.next_token.clone();
        Ok(PageResult::new(response, next_token))
    }
}
