//! AWS End User Messaging Social models
//!
//! REST-JSON shapes for the linked WhatsApp Business Account operations;
//! every field is camelCase on the wire.

use super::epoch;
use crate::pagination::Paginated;
use crate::select::Selectable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Registration state of a linked account
    pub enum RegistrationStatus {
        Complete => "COMPLETE",
        Incomplete => "INCOMPLETE",
    }
}

/// Event destination for a WhatsApp Business Account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDestination {
    pub event_destination_arn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

/// Summary row returned by the list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedWhatsAppBusinessAccountSummary {
    pub arn: String,
    pub id: String,
    pub waba_id: String,
    pub registration_status: RegistrationStatus,
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub link_date: Option<DateTime<Utc>>,
    pub waba_name: String,
    #[serde(default)]
    pub event_destinations: Vec<EventDestination>,
}

/// Phone number attached to a linked account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppPhoneNumberSummary {
    pub arn: String,
    pub phone_number: String,
    pub phone_number_id: String,
    pub meta_phone_number_id: String,
    pub display_phone_number_name: String,
    pub display_phone_number: String,
    pub quality_rating: String,
}

/// Full details of a linked account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedWhatsAppBusinessAccount {
    pub arn: String,
    pub id: String,
    pub waba_id: String,
    pub registration_status: RegistrationStatus,
    #[serde(default, with = "epoch::option", skip_serializing_if = "Option::is_none")]
    pub link_date: Option<DateTime<Utc>>,
    pub waba_name: String,
    #[serde(default)]
    pub event_destinations: Vec<EventDestination>,
    #[serde(default)]
    pub phone_numbers: Vec<WhatsAppPhoneNumberSummary>,
}

/// Resource tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Parse `KEY=VALUE` (or a bare `KEY`)
    pub fn parse(raw: &str) -> Option<Self> {
        let (key, value) = match raw.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value.to_string())),
            None => (raw.trim(), None),
        };
        if key.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            value,
        })
    }
}

// ============================================================================
// ListLinkedWhatsAppBusinessAccounts
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLinkedWhatsAppBusinessAccountsRequest {
    pub next_token: Option<String>,
    pub max_results: Option<u32>,
}

impl ListLinkedWhatsAppBusinessAccountsRequest {
    /// Query string parameters
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(token) = self.next_token.as_deref().filter(|t| !t.is_empty()) {
            query.push(("nextToken", token.to_string()));
        }
        if let Some(max) = self.max_results {
            query.push(("maxResults", max.to_string()));
        }
        query
    }
}

impl Paginated for ListLinkedWhatsAppBusinessAccountsRequest {
    fn continuation_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_continuation_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLinkedWhatsAppBusinessAccountsResponse {
    #[serde(default)]
    pub linked_accounts: Vec<LinkedWhatsAppBusinessAccountSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Selectable for ListLinkedWhatsAppBusinessAccountsResponse {
    const FIELDS: &'static [&'static str] = &["linkedAccounts", "nextToken"];
    const DEFAULT_FIELD: Option<&'static str> = Some("linkedAccounts");
}

// ============================================================================
// GetLinkedWhatsAppBusinessAccount / DisassociateWhatsAppBusinessAccount
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetLinkedWhatsAppBusinessAccountRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLinkedWhatsAppBusinessAccountResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<LinkedWhatsAppBusinessAccount>,
}

impl Selectable for GetLinkedWhatsAppBusinessAccountResponse {
    const FIELDS: &'static [&'static str] = &["account"];
    const DEFAULT_FIELD: Option<&'static str> = Some("account");
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisassociateWhatsAppBusinessAccountRequest {
    pub id: String,
}

/// Empty output shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisassociateWhatsAppBusinessAccountResponse {}

impl Selectable for DisassociateWhatsAppBusinessAccountResponse {
    const FIELDS: &'static [&'static str] = &[];
    const DEFAULT_FIELD: Option<&'static str> = None;
}

// ============================================================================
// Tagging
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTagsForResourceRequest {
    pub resource_arn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Selectable for ListTagsForResourceResponse {
    const FIELDS: &'static [&'static str] = &["statusCode", "tags"];
    const DEFAULT_FIELD: Option<&'static str> = Some("tags");
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceRequest {
    pub resource_arn: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
}

impl Selectable for TagResourceResponse {
    const FIELDS: &'static [&'static str] = &["statusCode"];
    const DEFAULT_FIELD: Option<&'static str> = Some("statusCode");
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceRequest {
    pub resource_arn: String,
    pub tag_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i32>,
}

impl Selectable for UntagResourceResponse {
    const FIELDS: &'static [&'static str] = &["statusCode"];
    const DEFAULT_FIELD: Option<&'static str> = Some("statusCode");
}
