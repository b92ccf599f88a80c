//! HTTP client module
//!
//! Provides the HTTP client the fetcher uses for its single GET per page.
//!
//! # Features
//!
//! - **Base URL joining**: provider paths resolve against a configurable base
//! - **Credential redaction**: secret query parameters are hidden in logs
//! - **Status classification**: non-2xx responses become typed fetch errors

mod client;

pub use client::{
    redact, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig, USER_AGENT,
};

#[cfg(test)]
mod tests;
