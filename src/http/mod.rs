//! HTTP client module
//!
//! Transport for the two AWS wire protocols used by the service clients.
//!
//! # Features
//!
//! - **AWS JSON 1.1**: `X-Amz-Target` dispatch on `POST /`
//! - **REST-JSON**: method, path and query string dispatch
//! - **Error classification**: AWS error bodies become `Error::Service`

mod client;

pub use client::{parse_service_error, HttpClient, AMZ_JSON_1_1};

#[cfg(test)]
mod tests;
