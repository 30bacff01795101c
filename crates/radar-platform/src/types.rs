//! Platform request and response bodies.
//!
//! Every response is a `{"success": bool, ...}` envelope. The agent envelope is
//! kept deliberately loose: its `result` is handed to the scan parser as raw
//! JSON and never validated here.

use radar_core::{lenient, ExecutionLog, Schedule};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/agent`.
#[derive(Debug, Serialize)]
pub struct InvokeRequest<'a> {
    pub message: &'a str,
    pub agent_id: &'a str,
}

/// Response of an agent invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentEnvelope {
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    /// Expected to be `{"result": <text or object>}`; anything else counts as
    /// carrying no result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentEnvelope {
    /// The `response.result` payload, if present and not `null`.
    #[must_use]
    pub fn result(&self) -> Option<&serde_json::Value> {
        self.response
            .as_ref()
            .and_then(|r| r.get("result"))
            .filter(|v| !v.is_null())
    }

    /// Successful envelope wrapping `result`.
    #[must_use]
    pub fn with_result(result: serde_json::Value) -> Self {
        Self {
            success: true,
            response: Some(serde_json::json!({ "result": result })),
            error: None,
        }
    }

    /// Failed envelope carrying `error`.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }
}

/// Response of `GET /api/schedules`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleListResponse {
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    /// Elements that fail to decode are skipped.
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub schedules: Option<Vec<Schedule>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub error: Option<String>,
}

/// Response of `GET /api/schedules/{id}/logs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionLogResponse {
    #[serde(default, deserialize_with = "success_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::object_list")]
    pub executions: Option<Vec<ExecutionLog>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub error: Option<String>,
}

/// Acknowledgement of a pause or resume request.
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    #[serde(default = "default_true", deserialize_with = "success_flag")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient::string")]
    pub error: Option<String>,
}

fn default_true() -> bool {
    true
}

fn success_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::flag(deserializer)?.unwrap_or(false))
}
