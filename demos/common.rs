//! Common utilities for campus assistant demos
//!
//! Note: This file is meant to be included in demos via `#[path = "common.rs"] mod common;`
//! It's not a standalone demo, so Cargo warnings about unused functions are expected.

#![allow(dead_code)] // Functions are used by demos that include this module

use campus_core::CampusConfig;

/// Load the assistant configuration, falling back to environment variables
/// when no config.toml is present.
///
/// Credentials can live in config.toml:
///
/// ```toml
/// [weather]
/// api_key = "${WEATHER_API_KEY}"
///
/// [warehouse]
/// connection_string = "${WAREHOUSE_URL}"
/// ```
///
/// or directly in the environment (`WEATHER_API_KEY`, `WAREHOUSE_URL`,
/// `GEMINI_API_KEY`). See config.toml.example.
pub fn load_config() -> CampusConfig {
    match CampusConfig::load() {
        Ok(config) => config,
        Err(e) => {
            println!("No config file loaded ({e}); using environment variables only");
            CampusConfig::from_env()
        }
    }
}

/// Print demo header banner
pub fn print_header(title: &str) {
    let width = 60;
    let padding = (width - title.len() - 2) / 2;

    println!("\n╔{}╗", "═".repeat(width));
    println!(
        "║{}{title}{}║",
        " ".repeat(padding),
        " ".repeat(width - padding - title.len())
    );
    println!("╚{}╝\n", "═".repeat(width));
}
