//! ENOT SDK Core Library
//!
//! Shared data model, configuration and errors for the enot.io client.
//! The signing and transport crates build on these types.

pub mod types;
pub mod error;
pub mod config;

pub use types::*;
pub use error::*;
pub use config::*;

/// Result type for core operations
pub type EnotResult<T> = Result<T, EnotError>;
