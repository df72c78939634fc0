//! Web-backed tools for the campus assistant
//!
//! Currently provides the weather lookup tool.

pub mod weather;

pub use weather::{WeatherPayload, WeatherReport, WeatherTool};
