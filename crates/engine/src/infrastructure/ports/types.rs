//! Types crossing the context provider boundary.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifies one in-flight API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The request a conversion runs under, supplied by the serving layer.
///
/// Background work (indexing, exports) converts without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHandle {
    pub id: RequestId,
    /// Authenticated principal, if any.
    pub current_user: Option<String>,
}

impl RequestHandle {
    pub fn new(current_user: Option<String>) -> Self {
        Self {
            id: RequestId::new(),
            current_user,
        }
    }
}

/// Where a context came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextOrigin {
    /// Attached to an in-flight request and shared by everything serving it.
    Request(RequestId),
    /// Built for work running outside any request.
    Standalone,
}

/// Execution-scoped handle required by persistence and relationship queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub id: Uuid,
    pub origin: ContextOrigin,
    pub current_user: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Context {
    pub fn for_request(request: &RequestHandle, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin: ContextOrigin::Request(request.id),
            current_user: request.current_user.clone(),
            created_at,
        }
    }

    pub fn standalone(created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin: ContextOrigin::Standalone,
            current_user: None,
            created_at,
        }
    }

    pub fn is_standalone(&self) -> bool {
        matches!(self.origin, ContextOrigin::Standalone)
    }
}
