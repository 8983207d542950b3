//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod in_memory;
pub mod ports;
pub mod request_context;
pub mod settings;
