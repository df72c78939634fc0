//! Name statistics tool over the analytical warehouse

use crate::config::WarehouseToolConfig;
use anyhow::anyhow;
use async_trait::async_trait;
use campus_core::{
    CampusConfig, Envelope, FailureCode, Result as CampusResult, Tool, ToolContext, ToolResponse,
};
use campus_telemetry::{safe_serialize, trace_tool_call, ToolSpanAttributes};
use campus_tools::ToolSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, Row};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Success payload: the summed count plus a descriptive sentence.
///
/// A name with zero recorded occurrences is a SUCCESS with a zero count and
/// a "not found" sentence, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameStats {
    pub name: String,
    pub total_occurrences: i64,
    pub summary: String,
}

/// Name statistics tool
///
/// Runs one parameterized aggregation against the configured warehouse
/// table, summing occurrence counts case-insensitively by exact name. The
/// warehouse client is constructed inside the call, so connection failures
/// surface in the error envelope. Nothing is retried or cached.
pub struct NameStatsTool {
    name: String,
    description: String,
    connection_string: Option<String>,
    config: WarehouseToolConfig,
}

impl NameStatsTool {
    pub fn new(connection_string: Option<String>) -> Self {
        Self::with_config(connection_string, WarehouseToolConfig::default())
    }

    pub fn from_config(config: &CampusConfig) -> Self {
        Self::with_config(
            config.warehouse.connection_string.clone(),
            WarehouseToolConfig {
                names_table: config.warehouse.names_table.clone(),
                ..WarehouseToolConfig::default()
            },
        )
    }

    pub fn with_config(connection_string: Option<String>, config: WarehouseToolConfig) -> Self {
        Self {
            name: "get_name_stats".to_string(),
            description: "Looks up how many times a given first name appears in the historical \
                name records and returns the total count."
                .to_string(),
            connection_string,
            config,
        }
    }

    async fn lookup(&self, name: Option<&str>) -> Envelope<NameStats> {
        let Some(name) = name else {
            return Envelope::error(FailureCode::Internal, "Missing 'name' parameter");
        };

        let Some(conn) = self.connection_string.as_deref() else {
            warn!("Warehouse connection not configured");
            return Envelope::error(
                FailureCode::MissingCredential,
                "Warehouse connection not configured. Set warehouse.connection_string in \
                 config.toml or the WAREHOUSE_URL environment variable.",
            );
        };

        match self.query_total(conn, name).await {
            Ok(row) => Envelope::success(stats_for(name, row)),
            Err(e) => {
                warn!(name = %name, error = %e, "Name statistics lookup failed");
                Envelope::error(
                    FailureCode::Upstream,
                    format!("Error retrieving name statistics: {e}"),
                )
            }
        }
    }

    async fn query_total(&self, conn: &str, name: &str) -> anyhow::Result<Option<(String, i64)>> {
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(self.config.timeout_secs))
            .connect(conn)
            .await
            .map_err(|e| anyhow!("Failed to connect to warehouse: {e}"))?;

        debug!(name = %name, table = %self.config.names_table, "Querying name statistics");

        let row = sqlx::query(&build_query(&self.config.names_table))
            .bind(name)
            .fetch_optional(&pool)
            .await
            .map_err(|e| anyhow!("Failed to query name statistics: {e}"))?;

        Ok(row.map(|r| (r.get("name"), r.get("total_occurrences"))))
    }
}

#[async_trait]
impl Tool for NameStatsTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        ToolSchema::new()
            .property("name", "string", "The first name to look up")
            .required("name")
            .build()
    }

    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        params: Value,
    ) -> CampusResult<ToolResponse> {
        let envelope = self.lookup(params["name"].as_str()).await;

        trace_tool_call(ToolSpanAttributes {
            tool_name: self.name.clone(),
            tool_description: self.description.clone(),
            tool_call_id: ctx.function_call_id().to_string(),
            invocation_id: ctx.invocation_id().to_string(),
            args_json: safe_serialize(&params),
            response_json: safe_serialize(&envelope),
        });

        envelope.into_response()
    }
}

/// Aggregation over the names table: case-insensitive exact match, summed
/// counts, at most one row thanks to the grouping.
fn build_query(table: &str) -> String {
    format!(
        "SELECT name, SUM(occurrences)::BIGINT AS total_occurrences \
         FROM {table} WHERE LOWER(name) = LOWER($1) GROUP BY name LIMIT 1"
    )
}

fn stats_for(queried_name: &str, row: Option<(String, i64)>) -> NameStats {
    match row {
        Some((name, total_occurrences)) => {
            let summary = format!(
                "The name {name} appears {total_occurrences} times in the historical records."
            );
            NameStats {
                name,
                total_occurrences,
                summary,
            }
        }
        None => NameStats {
            name: queried_name.to_string(),
            total_occurrences: 0,
            summary: format!("The name {queried_name} was not found in the historical records."),
        },
    }
}
