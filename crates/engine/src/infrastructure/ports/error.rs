//! Error types for port operations.

use super::types::RequestId;

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Storage operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepoError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failure to obtain an execution context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The request already finished; its context was torn down.
    #[error("Request {0} has already completed")]
    RequestCompleted(RequestId),
    /// Request state is inconsistent (e.g. a context bound to another user).
    #[error("Malformed request state for {request}: {message}")]
    MalformedRequest { request: RequestId, message: String },
}

/// Errors that abort a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// The generic converter could not represent an entity.
    #[error("Cannot convert {entity_type} {id}: {message}")]
    Conversion {
        entity_type: &'static str,
        id: String,
        message: String,
    },

    #[error("Converter does not support {0} objects")]
    UnsupportedModel(&'static str),
}

impl ConvertError {
    pub fn conversion(entity_type: &'static str, id: impl ToString, message: impl ToString) -> Self {
        Self::Conversion {
            entity_type,
            id: id.to_string(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_error_messages_carry_context() {
        let err = RepoError::database("find_by_item", "connection reset");
        assert_eq!(err.to_string(), "Database error in find_by_item: connection reset");

        let err = RepoError::not_found("Item", "abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Item not found: abc");
    }

    #[test]
    fn convert_error_wraps_repo_error_transparently() {
        let err: ConvertError = RepoError::database("metadata", "timeout").into();
        assert_eq!(err.to_string(), "Database error in metadata: timeout");
    }
}
