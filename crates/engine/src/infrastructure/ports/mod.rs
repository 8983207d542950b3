//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Persistence reads (items, bundles, bitstreams, metadata)
//! - Relationship queries
//! - Context acquisition (request-scoped or standalone)
//! - Generic conversion of simple entities
//! - Clock (for testing)

mod context;
mod converter;
mod error;
mod repos;
mod testing;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{ItemRepo, RelationshipRepo};

// =============================================================================
// Context & Conversion Ports
// =============================================================================
pub use context::ContextProvider;
pub use converter::RestConverter;
pub use types::{Context, ContextOrigin, RequestHandle, RequestId};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use context::MockContextProvider;
#[cfg(test)]
pub use converter::MockRestConverter;
#[cfg(test)]
pub use repos::{MockItemRepo, MockRelationshipRepo};
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ContextError, ConvertError, RepoError};
