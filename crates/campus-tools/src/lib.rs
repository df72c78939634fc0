//! Tool plumbing for the campus assistant
//!
//! This crate provides:
//! - Tool schema builder for parameter declarations
//! - Default tool context implementation
//! - The calendar data source and the schedule query tool

pub mod calendar;
pub mod context;
pub mod schedule;
pub mod schema;

// Re-exports
pub use calendar::{CalendarEvent, CalendarSource, Clock, StaticCalendar, SystemClock};
pub use context::DefaultToolContext;
pub use schedule::{resolve_query, SchedulePayload, ScheduleTool};
pub use schema::ToolSchema;

// Re-export core types
pub use campus_core::{Envelope, FailureCode, Result, Tool, ToolContext, ToolResponse};
