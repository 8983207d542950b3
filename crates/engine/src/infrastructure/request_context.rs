//! Request-scoped context registry.
//!
//! The serving layer registers nothing up front: the first conversion that
//! asks for a request's context creates it, later ones share it, and
//! `complete` tears it down when the response is sent. Completion markers
//! expire after a retention window so the map stays bounded.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::infrastructure::ports::{
    ClockPort, Context, ContextError, ContextProvider, RequestHandle, RequestId,
};

enum RequestSlot {
    Open(Context),
    Completed(DateTime<Utc>),
}

/// In-process [`ContextProvider`] keyed by request id.
///
/// A completed request keeps rejecting attaches for `completed_retention`.
/// A request left open longer than `abandon_after` is closed by the next sweep.
pub struct RequestContexts {
    slots: DashMap<RequestId, RequestSlot>,
    clock: Arc<dyn ClockPort>,
    completed_retention: Duration,
    abandon_after: Duration,
}

impl RequestContexts {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            slots: DashMap::new(),
            clock,
            completed_retention: Duration::minutes(10),
            abandon_after: Duration::hours(1),
        }
    }

    pub fn with_retention(
        mut self,
        completed_retention: Duration,
        abandon_after: Duration,
    ) -> Self {
        self.completed_retention = completed_retention;
        self.abandon_after = abandon_after;
        self
    }

    /// Marks the request finished and returns the context it held, if any.
    ///
    /// Attaching to a completed request fails with [`ContextError::RequestCompleted`].
    /// Also sweeps expired markers and abandoned requests.
    pub fn complete(&self, request_id: RequestId) -> Option<Context> {
        let previous = self
            .slots
            .insert(request_id, RequestSlot::Completed(self.clock.now()));
        self.sweep();
        match previous {
            Some(RequestSlot::Open(context)) => Some(context),
            _ => None,
        }
    }

    /// Drops completion markers older than `max_age`.
    pub fn purge_completed(&self, max_age: Duration) {
        let now = self.clock.now();
        self.slots.retain(|_, slot| match slot {
            RequestSlot::Completed(at) => now - *at <= max_age,
            RequestSlot::Open(_) => true,
        });
    }

    /// Closes requests whose context is older than the abandon threshold and
    /// drops completion markers past retention.
    pub fn sweep(&self) {
        let now = self.clock.now();
        let mut abandoned = 0usize;
        for mut slot in self.slots.iter_mut() {
            if let RequestSlot::Open(context) = slot.value() {
                if now - context.created_at > self.abandon_after {
                    *slot.value_mut() = RequestSlot::Completed(now);
                    abandoned += 1;
                }
            }
        }
        if abandoned > 0 {
            tracing::warn!(abandoned, "Closed requests that were never completed");
        }
        self.purge_completed(self.completed_retention);
    }

    pub fn open_requests(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot.value(), RequestSlot::Open(_)))
            .count()
    }

    fn attach_to(&self, request: &RequestHandle) -> Result<Context, ContextError> {
        match self.slots.entry(request.id) {
            Entry::Occupied(entry) => match entry.get() {
                RequestSlot::Open(context) if context.current_user != request.current_user => {
                    Err(ContextError::MalformedRequest {
                        request: request.id,
                        message: "context is bound to a different user".to_string(),
                    })
                }
                RequestSlot::Open(context) => Ok(context.clone()),
                RequestSlot::Completed(_) => Err(ContextError::RequestCompleted(request.id)),
            },
            Entry::Vacant(entry) => {
                let context = Context::for_request(request, self.clock.now());
                tracing::debug!(
                    request_id = %request.id,
                    context_id = %context.id,
                    "Attached new context to request"
                );
                entry.insert(RequestSlot::Open(context.clone()));
                Ok(context)
            }
        }
    }
}

#[async_trait]
impl ContextProvider for RequestContexts {
    async fn attach(&self, request: &RequestHandle) -> Result<Context, ContextError> {
        self.attach_to(request)
    }

    async fn standalone(&self) -> Result<Context, ContextError> {
        Ok(Context::standalone(self.clock.now()))
    }
}
