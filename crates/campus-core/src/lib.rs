//! Core traits and types for the campus assistant toolkit
//!
//! This crate provides the foundational abstractions shared by all tools.

pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
pub mod traits;

// Re-exports
pub use config::CampusConfig;
pub use context::ToolContext;
pub use envelope::{Envelope, FailureCode};
pub use error::{Error, Result};
pub use traits::{Tool, ToolResponse, Toolset};
