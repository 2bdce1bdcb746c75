//! HTTP client for the AWS wire protocols
//!
//! Provides the transport used by the service clients:
//! - AWS JSON 1.1 (`POST /` with an `X-Amz-Target` header), used by Budgets
//! - REST-JSON (method + path + query string), used by Social Messaging
//!
//! Error bodies are classified into `Error::Service`. There is no retry
//! and no request signing here.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::Service;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Content type for the AWS JSON 1.1 protocol
pub const AMZ_JSON_1_1: &str = "application/x-amz-json-1.1";

/// HTTP client bound to one `ClientConfig`
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Call an AWS JSON 1.1 operation
    pub async fn post_json_target<B, T>(
        &self,
        service: Service,
        operation: &str,
        body: &B,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let prefix = service.target_prefix().ok_or_else(|| {
            Error::config(format!("{service} does not use the JSON target protocol"))
        })?;
        let url = self.config.endpoint_for(service);
        let target = format!("{prefix}.{operation}");

        debug!(%service, operation, %url, "POST json target");

        let mut req = self
            .client
            .post(&url)
            .header("X-Amz-Target", target)
            .header(CONTENT_TYPE, AMZ_JSON_1_1)
            .body(serde_json::to_vec(body)?);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(|e| self.transport_error(e))?;
        self.read_response(operation, response).await
    }

    /// Call a REST-JSON operation
    pub async fn rest_json<T>(
        &self,
        service: Service,
        operation: &str,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let base = self.config.endpoint_for(service);
        let url = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = url::Url::parse(&url)?;

        debug!(%service, operation, %method, %url, "REST json");

        let mut req = self.client.request(method, url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !query.is_empty() {
            req = req.query(query);
        }

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| self.transport_error(e))?;
        self.read_response(operation, response).await
    }

    /// Decode a success body or classify an error body
    async fn read_response<T: DeserializeOwned>(
        &self,
        operation: &str,
        response: Response,
    ) -> Result<T> {
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            return Err(parse_service_error(operation, status.as_u16(), &headers, &text));
        }

        debug!(operation, status = status.as_u16(), bytes = text.len(), "Response received");

        // Operations with an empty output shape may return no body at all
        let text = if text.trim().is_empty() { "{}" } else { &text };
        Ok(serde_json::from_str(text)?)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout().as_millis() as u64,
            }
        } else {
            Error::Http(e)
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Build a service error from an AWS error response
pub fn parse_service_error(operation: &str, status: u16, headers: &HeaderMap, body: &str) -> Error {
    let json: Value = serde_json::from_str(body).unwrap_or(Value::Null);

    let field = |names: &[&str]| {
        names
            .iter()
            .find_map(|name| json.get(*name).and_then(Value::as_str))
            .map(String::from)
    };

    let code = headers
        .get("x-amzn-errortype")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .or_else(|| field(&["__type", "code", "Code"]))
        .map(|c| normalize_error_code(&c))
        .unwrap_or_else(|| "UnknownError".to_string());

    let message = field(&["message", "Message", "errorMessage"]).unwrap_or_else(|| {
        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body.to_string()
        }
    });

    Error::service(operation, status, code, message)
}

/// Strip the namespace (`aws.budgets#`) and trailing detail (`:http://...`)
fn normalize_error_code(raw: &str) -> String {
    let code = raw.rsplit('#').next().unwrap_or(raw);
    let code = code.split(':').next().unwrap_or(code);
    code.trim().to_string()
}

#[cfg(test)]
mod client_tests {
    use super::*;
    use test_case::test_case;

    #[test_case("NotFoundException", "NotFoundException" ; "plain")]
    #[test_case("com.amazonaws.budgets#NotFoundException", "NotFoundException" ; "namespaced")]
    #[test_case("ValidationException:http://internal.amazon.com/", "ValidationException" ; "with detail")]
    fn test_normalize_error_code(raw: &str, expected: &str) {
        assert_eq!(normalize_error_code(raw), expected);
    }

    #[test]
    fn test_parse_service_error_from_body() {
        let err = parse_service_error(
            "DescribeBudgets",
            400,
            &HeaderMap::new(),
            r#"{"__type": "aws.budgets#InvalidParameterException", "Message": "bad account"}"#,
        );
        match err {
            Error::Service {
                operation,
                status,
                code,
                message,
            } => {
                assert_eq!(operation, "DescribeBudgets");
                assert_eq!(status, 400);
                assert_eq!(code, "InvalidParameterException");
                assert_eq!(message, "bad account");
            }
            other => panic!("Expected Service error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_service_error_prefers_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-errortype", "AccessDeniedByMetaException".parse().unwrap());
        let err = parse_service_error("GetLinkedWhatsAppBusinessAccount", 403, &headers, "");
        assert_eq!(err.service_code(), Some("AccessDeniedByMetaException"));
        assert!(err.to_string().contains("HTTP 403"));
    }
}
