//! HTTP transport used by the identity client
//!
//! The client only needs GET and DELETE plus the raw status and body, so the
//! transport is kept behind a small trait. [`ReqwestTransport`] is the
//! production implementation.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the body as JSON, reporting mismatches as schema errors
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(ClientError::from)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse>;
    async fn delete(&self, url: &str) -> Result<TransportResponse>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Wrap an existing reqwest client (cookies, auth headers and TLS are its concern)
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Build a transport, applying the configured timeout if any
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { http_client })
    }

    async fn collect(response: reqwest::Response) -> Result<TransportResponse> {
        let status = response.status();
        let body = response.bytes().await?;
        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        debug!("GET {}", url);
        let response = self.http_client.get(url).send().await?;
        Self::collect(response).await
    }

    async fn delete(&self, url: &str) -> Result<TransportResponse> {
        debug!("DELETE {}", url);
        let response = self.http_client.delete(url).send().await?;
        Self::collect(response).await
    }
}
