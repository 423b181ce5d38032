//! Application root resolution
//!
//! Endpoint paths are appended to whatever root the resolver reports at call
//! time, so a multi-tenant host can move the root between requests.

/// Source of the current application root URL
pub trait RootResolver: Send + Sync {
    fn root(&self) -> String;
}

/// Root that never changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoot(pub String);

impl StaticRoot {
    pub fn new(root: impl Into<String>) -> Self {
        Self(root.into())
    }
}

impl RootResolver for StaticRoot {
    fn root(&self) -> String {
        self.0.clone()
    }
}

impl<F> RootResolver for F
where
    F: Fn() -> String + Send + Sync,
{
    fn root(&self) -> String {
        self()
    }
}
