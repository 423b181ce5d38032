//! External identity client
//!
//! This module provides the client used by UI code to list the identity
//! providers available to the current user and to disconnect an existing
//! external identity. The provider list is memoized per client instance.

use crate::config::ClientConfig;
use crate::domain::{
    ConnectedIdentity, IdentityProvider, IdentityProviderRecord, LoginRedirect, ProviderList,
};
use crate::error::{ClientError, Result};
use crate::root::{RootResolver, StaticRoot};
use crate::transport::{HttpTransport, ReqwestTransport};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Client for the `authnz` endpoints
#[derive(Clone)]
pub struct IdentityClient {
    transport: Arc<dyn HttpTransport>,
    root: Arc<dyn RootResolver>,
    providers: Arc<RwLock<Option<ProviderList>>>,
}

impl IdentityClient {
    /// Create a new identity client
    pub fn new(transport: Arc<dyn HttpTransport>, root: Arc<dyn RootResolver>) -> Self {
        Self {
            transport,
            root,
            providers: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a client backed by reqwest and a fixed root from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::from_config(config)?;
        Ok(Self::new(
            Arc::new(transport),
            Arc::new(StaticRoot::new(config.root_url.clone())),
        ))
    }

    /// Absolute URL for a path, using the root as it is right now
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root.root(), path)
    }

    /// List the identity providers, fetching them only on first use
    ///
    /// The result is kept until [`invalidate`](Self::invalidate) is called.
    /// Concurrent first calls are not coalesced: each performs its own request
    /// and the last one to finish wins the cache.
    pub async fn list_providers(&self) -> Result<ProviderList> {
        {
            let cached = self.providers.read().await;
            if let Some(ref providers) = *cached {
                debug!("Using cached identity providers ({})", providers.len());
                return Ok(providers.clone());
            }
        }

        let url = self.url("authnz");
        let response = self.transport.get(&url).await?;

        if response.status != StatusCode::OK {
            warn!("Loading identity providers failed: {} {}", url, response.status);
            return Err(ClientError::Load);
        }

        let records: Vec<IdentityProviderRecord> = response.json()?;
        let providers: ProviderList = records.into_iter().map(IdentityProvider::create).collect();

        {
            let mut cached = self.providers.write().await;
            *cached = Some(providers.clone());
        }

        info!("Loaded {} identity providers", providers.len());
        Ok(providers)
    }

    /// Disconnect an external identity from the current user
    ///
    /// `None` is accepted and treated as nothing to do. The provider cache is
    /// left untouched.
    pub async fn disconnect_identity(&self, doomed: Option<&ConnectedIdentity>) -> Result<()> {
        let Some(identity) = doomed else {
            debug!("No identity given, skipping disconnect");
            return Ok(());
        };

        let url = self.url(&format!(
            "authnz/{}/disconnect/",
            urlencoding::encode(&identity.provider)
        ));
        let response = self.transport.delete(&url).await?;

        if response.status != StatusCode::OK {
            warn!("Disconnect failed: {} {}", url, response.status);
            return Err(ClientError::Delete);
        }

        info!("Disconnected identity provider {}", identity.provider);
        Ok(())
    }

    /// Start a login against an external provider, returning where to send the browser
    pub async fn begin_login(&self, provider: &str) -> Result<LoginRedirect> {
        let url = self.url(&format!("authnz/{}/login", urlencoding::encode(provider)));
        let response = self.transport.get(&url).await?;

        if response.status != StatusCode::OK {
            warn!("Starting login failed: {} {}", url, response.status);
            return Err(ClientError::Login);
        }

        response.json()
    }

    /// Currently cached provider list, without touching the network
    pub async fn cached_providers(&self) -> Option<ProviderList> {
        self.providers.read().await.clone()
    }

    /// Drop the cached provider list
    pub async fn invalidate(&self) {
        let mut cached = self.providers.write().await;
        *cached = None;
    }

    /// Drop the cached provider list and fetch it again
    pub async fn refresh(&self) -> Result<ProviderList> {
        self.invalidate().await;
        self.list_providers().await
    }
}
