//! Connected identity domain models for social/SSO identity tracking

use super::identity_provider::IdentityProvider;
use serde::{Deserialize, Serialize};

/// Existing association between the current user and an external provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedIdentity {
    #[serde(default)]
    pub id: Option<String>,
    pub provider: String,
}

impl ConnectedIdentity {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            id: None,
            provider: provider.into(),
        }
    }
}

impl From<&IdentityProvider> for ConnectedIdentity {
    fn from(provider: &IdentityProvider) -> Self {
        Self {
            id: provider.id().map(str::to_string),
            provider: provider.provider().to_string(),
        }
    }
}

/// Response of `GET {root}authnz/{provider}/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRedirect {
    pub redirect_uri: String,
}
