//! Domain models for external identities

pub mod connected_identity;
pub mod identity_provider;

pub use connected_identity::{ConnectedIdentity, LoginRedirect};
pub use identity_provider::{IdentityProvider, IdentityProviderRecord, ProviderList};
