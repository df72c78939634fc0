//! Weather lookup tool backed by an external HTTP provider

use anyhow::anyhow;
use async_trait::async_trait;
use campus_core::{
    CampusConfig, Envelope, FailureCode, Result as CampusResult, Tool, ToolContext, ToolResponse,
};
use campus_telemetry::{safe_serialize, trace_tool_call, ToolSpanAttributes};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Weather lookup tool
///
/// Issues a single GET against the provider's current-conditions endpoint
/// and normalizes the JSON into a one-sentence report plus structured
/// fields. A missing API key is reported as an error envelope before any
/// network traffic happens. No retries; the client timeout is the only
/// deadline.
pub struct WeatherTool {
    name: String,
    description: String,
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

/// Success payload: the composed sentence plus the normalized fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub report: String,
    pub data: WeatherReport,
}

/// Normalized weather fields. Each field carries the provider's value, or
/// the literal string "unknown" when the provider omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Value,
    pub condition: Value,
    pub temp_c: Value,
    pub temp_f: Value,
    pub humidity: Value,
    pub wind_kph: Value,
}

impl WeatherTool {
    /// Create a weather tool talking to the real provider.
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        Self::with_base_url(api_key, "http://api.weatherapi.com".to_string())
    }

    pub fn from_config(config: &CampusConfig) -> anyhow::Result<Self> {
        Self::with_base_url(
            config.weather.api_key.clone(),
            config.weather.base_url.clone(),
        )
    }

    /// Create with an explicit provider base URL. Tests point this at a
    /// local mock server.
    pub fn with_base_url(api_key: Option<String>, base_url: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("campus-assistant-tools/0.1.0")
            .timeout(Duration::from_secs(30))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            name: "get_weather".to_string(),
            description: "Retrieves the current weather report for a specified city, including \
                condition, temperature, humidity, and wind speed."
                .to_string(),
            api_key,
            base_url,
            client,
        })
    }

    async fn lookup(&self, city: Option<&str>) -> Envelope<WeatherPayload> {
        let Some(city) = city else {
            return Envelope::error(FailureCode::Internal, "Missing 'city' parameter");
        };

        let Some(key) = self.api_key.as_deref() else {
            warn!("Weather API key not configured");
            return Envelope::error(
                FailureCode::MissingCredential,
                "Weather API key not configured. Set weather.api_key in config.toml \
                 or the WEATHER_API_KEY environment variable.",
            );
        };

        match self.fetch_current(key, city).await {
            Ok(conditions) => Envelope::success(compose_report(city, conditions)),
            Err(e) => {
                warn!(city = %city, error = %e, "Weather lookup failed");
                Envelope::error(
                    FailureCode::Upstream,
                    format!("Error retrieving weather information: {e}"),
                )
            }
        }
    }

    async fn fetch_current(&self, key: &str, city: &str) -> anyhow::Result<CurrentConditions> {
        let url = format!("{}/v1/current.json", self.base_url);
        debug!(city = %city, "Requesting current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("key", key), ("q", city), ("aqi", "no")])
            .send()
            .await
            .map_err(|e| anyhow!("Failed to reach weather provider: {e}"))?;

        let response = response
            .error_for_status()
            .map_err(|e| anyhow!("Weather provider returned an error: {e}"))?;

        response
            .json::<CurrentConditions>()
            .await
            .map_err(|e| anyhow!("Failed to decode weather response: {e}"))
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "The name of the city for which to retrieve the weather report"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(
        &self,
        ctx: Arc<dyn ToolContext>,
        params: Value,
    ) -> CampusResult<ToolResponse> {
        let envelope = self.lookup(params["city"].as_str()).await;

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

/// Provider response. Every field is optional so a sparse payload still
/// normalizes instead of failing to decode.
#[derive(Debug, Default, Deserialize)]
struct CurrentConditions {
    #[serde(default)]
    location: LocationInfo,
    #[serde(default)]
    current: CurrentInfo,
}

#[derive(Debug, Default, Deserialize)]
struct LocationInfo {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrentInfo {
    temp_c: Option<f64>,
    temp_f: Option<f64>,
    humidity: Option<f64>,
    wind_kph: Option<f64>,
    #[serde(default)]
    condition: ConditionInfo,
}

#[derive(Debug, Default, Deserialize)]
struct ConditionInfo {
    text: Option<String>,
}

fn number_or_unknown(value: Option<f64>) -> Value {
    match value {
        Some(v) => json!(v),
        None => Value::String("unknown".to_string()),
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compose_report(queried_city: &str, conditions: CurrentConditions) -> WeatherPayload {
    // The provider's resolved location name wins; fall back to what the
    // caller asked for.
    let location = Value::String(
        conditions
            .location
            .name
            .unwrap_or_else(|| queried_city.to_string()),
    );
    let condition = Value::String(
        conditions
            .current
            .condition
            .text
            .unwrap_or_else(|| "unknown".to_string()),
    );

    let data = WeatherReport {
        location,
        condition,
        temp_c: number_or_unknown(conditions.current.temp_c),
        temp_f: number_or_unknown(conditions.current.temp_f),
        humidity: number_or_unknown(conditions.current.humidity),
        wind_kph: number_or_unknown(conditions.current.wind_kph),
    };

    let report = format!(
        "The weather in {} is {} with a temperature of {} degrees Celsius \
         ({} degrees Fahrenheit). Humidity is {}% and wind speed is {} km/h.",
        display(&data.location),
        display(&data.condition),
        display(&data.temp_c),
        display(&data.temp_f),
        display(&data.humidity),
        display(&data.wind_kph),
    );

    WeatherPayload { report, data }
}
