//! Context resolution for graph lookups.

use std::sync::Arc;

use crate::infrastructure::ports::{Context, ContextError, ContextProvider, RequestHandle};

/// Picks the context a conversion's relationship lookup runs under.
///
/// Conversions run both while serving a request and from background jobs
/// (indexing, exports); the caller passes the request when there is one.
#[derive(Clone)]
pub struct ContextResolver {
    provider: Arc<dyn ContextProvider>,
}

impl ContextResolver {
    pub fn new(provider: Arc<dyn ContextProvider>) -> Self {
        Self { provider }
    }

    /// The request's context when a request is in flight, otherwise a fresh
    /// standalone one.
    pub async fn resolve(&self, request: Option<&RequestHandle>) -> Result<Context, ContextError> {
        match request {
            Some(request) => self.provider.attach(request).await,
            None => {
                tracing::debug!("No request in flight, using a standalone context");
                self.provider.standalone().await
            }
        }
    }
}
