//! Campus assistant toolkit
//!
//! Wires the individual tool crates into the standard toolset exposed to a
//! hosting agent runtime: weather lookup, schedule query, and name
//! statistics.

use async_trait::async_trait;
use campus_core::{CampusConfig, Result, Tool, Toolset};
use campus_database_tools::NameStatsTool;
use campus_tools::{CalendarSource, ScheduleTool, StaticCalendar};
use campus_web_tools::WeatherTool;
use std::sync::Arc;

// Re-exports
pub use campus_core::{Envelope, Error, FailureCode, ToolContext, ToolResponse};
pub use campus_tools::DefaultToolContext;

/// The assistant's standard toolset: weather, schedule, name statistics.
pub struct AssistantToolset {
    name: String,
    tools: Vec<Arc<dyn Tool>>,
}

impl AssistantToolset {
    /// Build the standard toolset from configuration, with the fixed
    /// semester calendar as the schedule source.
    pub fn from_config(config: &CampusConfig) -> Result<Self> {
        Self::with_calendar(config, Arc::new(StaticCalendar::semester_schedule()))
    }

    /// Build with an explicit calendar source.
    pub fn with_calendar(
        config: &CampusConfig,
        calendar: Arc<dyn CalendarSource>,
    ) -> Result<Self> {
        let weather = WeatherTool::from_config(config)?;
        let schedule = ScheduleTool::new(calendar);
        let name_stats = NameStatsTool::from_config(config);

        Ok(Self {
            name: "campus-assistant".to_string(),
            tools: vec![
                Arc::new(weather),
                Arc::new(schedule),
                Arc::new(name_stats),
            ],
        })
    }
}

#[async_trait]
impl Toolset for AssistantToolset {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get_tools(&self) -> Result<Vec<Arc<dyn Tool>>> {
        Ok(self.tools.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toolset_exposes_all_three_tools() {
        let config = CampusConfig::test_defaults();
        let toolset = AssistantToolset::from_config(&config).unwrap();

        assert_eq!(toolset.name(), "campus-assistant");

        let tools = toolset.get_tools().await.unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();

        assert_eq!(
            names,
            vec!["get_weather", "get_calendar_info", "get_name_stats"]
        );
    }
}
