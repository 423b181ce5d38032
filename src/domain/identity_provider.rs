//! Identity provider domain models
//!
//! Note: the provider list is owned by the server.
//! These models map the `authnz` records the server returns.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Raw provider record as returned by `GET {root}authnz`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProviderRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub provider: String,
}

/// Identity provider available to the current user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityProvider {
    id: Option<String>,
    provider: String,
}

/// Shared, immutable provider list handed out by the client cache
pub type ProviderList = Arc<[IdentityProvider]>;

impl IdentityProvider {
    /// Build a provider from its raw server record
    pub fn create(record: IdentityProviderRecord) -> Self {
        Self {
            id: record.id,
            provider: record.provider,
        }
    }

    /// Encoded server id of the association, if the server sent one
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Provider key used to build disconnect and login URLs
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Human label for well-known providers
    pub fn display_name(&self) -> Option<&'static str> {
        match self.provider.to_ascii_lowercase().as_str() {
            "google" => Some("Google"),
            "github" => Some("GitHub"),
            "globus" => Some("Globus"),
            "elixir" => Some("ELIXIR"),
            "okta" => Some("Okta"),
            "azure" => Some("Microsoft Azure"),
            "cilogon" => Some("CILogon"),
            "custos" => Some("Custos"),
            _ => None,
        }
    }
}

impl From<IdentityProviderRecord> for IdentityProvider {
    fn from(record: IdentityProviderRecord) -> Self {
        Self::create(record)
    }
}
