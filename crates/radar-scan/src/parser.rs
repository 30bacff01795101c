//! Normalisation of the manager agent's reply into a [`ScanResult`].
//!
//! The agent returns `{success, response: {result}, error}` where `result` is
//! either JSON text or an already-structured value. A structured value is
//! never validated: objects decode through [`ScanResult`]'s lenient field
//! decoders, and any other non-empty value records a scan with no fields.

use radar_core::ScanResult;
use radar_platform::AgentEnvelope;
use serde_json::Value;
use thiserror::Error;

/// Generic message for a scan that produced nothing usable.
pub const NO_DATA_MESSAGE: &str = "Scan returned no data. Please try again.";

/// Why an agent reply could not be turned into a [`ScanResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The envelope reported `success: false`.
    #[error("agent reported failure: {}", error.as_deref().unwrap_or("no detail"))]
    Rejected { error: Option<String> },

    /// The call succeeded but carried no `response.result`.
    #[error("agent reply carried no result")]
    MissingData { error: Option<String> },

    /// Textual JSON that failed to decode.
    #[error("agent result is malformed: {reason}")]
    Malformed {
        error: Option<String>,
        reason: String,
    },
}

impl ParseError {
    /// The envelope's own error text, when it supplied a non-empty one.
    #[must_use]
    pub fn envelope_error(&self) -> Option<&str> {
        match self {
            ParseError::Rejected { error }
            | ParseError::MissingData { error }
            | ParseError::Malformed { error, .. } => error.as_deref(),
        }
        .filter(|e| !e.trim().is_empty())
    }

    /// What to show the user: the agent's error verbatim, else the generic
    /// no-data message.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.envelope_error()
            .map_or_else(|| NO_DATA_MESSAGE.to_owned(), str::to_owned)
    }
}

/// Turns an agent envelope into a [`ScanResult`] or a typed failure.
///
/// # Errors
///
/// - [`ParseError::Rejected`] when `success` is false.
/// - [`ParseError::MissingData`] when there is no result, or the result is
///   empty (`""`, `false`, `0`, or text decoding to one of those).
/// - [`ParseError::Malformed`] when textual JSON fails to decode.
pub fn parse(envelope: &AgentEnvelope) -> Result<ScanResult, ParseError> {
    let error = envelope.error.clone();
    if !envelope.success {
        return Err(ParseError::Rejected { error });
    }
    let Some(result) = envelope.result() else {
        return Err(ParseError::MissingData { error });
    };

    match result {
        Value::String(text) if text.trim().is_empty() => Err(ParseError::MissingData { error }),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            // Tolerate one extra layer of string encoding.
            Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
                Ok(value) => structured(value, error),
                Err(_) => structured(Value::String(inner), error),
            },
            Ok(value) => structured(value, error),
            Err(e) => Err(ParseError::Malformed {
                error,
                reason: e.to_string(),
            }),
        },
        value => structured(value.clone(), error),
    }
}

fn structured(value: Value, error: Option<String>) -> Result<ScanResult, ParseError> {
    if is_empty_value(&value) {
        return Err(ParseError::MissingData { error });
    }
    if !value.is_object() {
        tracing::debug!(kind = kind_of(&value), "non-object scan result recorded without fields");
        return Ok(ScanResult::default());
    }
    serde_json::from_value(value).map_err(|e| ParseError::Malformed {
        error,
        reason: e.to_string(),
    })
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() < f64::MIN_POSITIVE),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
