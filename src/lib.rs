//! authnz client - external identity data access
//!
//! This crate lists the external authentication providers connected to the
//! current user and disconnects them, against the `authnz` HTTP endpoints.

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod root;
pub mod telemetry;
pub mod transport;

// Re-export commonly used types
pub use client::IdentityClient;
pub use config::ClientConfig;
pub use domain::{ConnectedIdentity, IdentityProvider, LoginRedirect, ProviderList};
pub use error::{ClientError, Result};
pub use root::{RootResolver, StaticRoot};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
