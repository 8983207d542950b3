//! Context provider port.

use async_trait::async_trait;

use super::error::ContextError;
use super::types::{Context, RequestHandle};

/// Hands out execution contexts.
///
/// A request-attached context is shared by everything serving that request;
/// a standalone context belongs to the caller alone.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContextProvider: Send + Sync {
    /// Context attached to an in-flight request, created on first use.
    async fn attach(&self, request: &RequestHandle) -> Result<Context, ContextError>;

    /// Fresh context for work running outside any request.
    async fn standalone(&self) -> Result<Context, ContextError>;
}
