//! Libris Engine library.
//!
//! Turns repository items into the REST representation served to clients.
//!
//! ## Structure
//!
//! - `converters/` - Item conversion and the generic per-entity converters
//! - `infrastructure/` - Port traits and their implementations
//! - `app` - Application composition

pub mod app;
pub mod converters;
pub mod infrastructure;

/// Test fixtures shared by unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
