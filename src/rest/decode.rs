//! Response decoding and error classification.
//!
//! Binance answers with either a JSON array or a JSON object. Business errors
//! come back as objects too, so the shape is inspected before a payload is
//! handed to the caller:
//!
//! - `{"code": -1021, "msg": "..."}` from the general API (`code` may also
//!   arrive as a numeric string)
//! - `{"success": false, "msg": "..."}` from the wallet API

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, BinanceError};

/// Decode a response body received with `status`.
pub(crate) fn decode_body(status: StatusCode, body: &str) -> Result<Value, BinanceError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(status = status.as_u16(), error = %e, "response body is not JSON");
        BinanceError::decode(
            format!("invalid JSON: {e}. Body: {}", truncate(body)),
            Some(status.as_u16()),
        )
    })?;

    match &value {
        Value::Object(map) => {
            if let Some(api_error) = api_error(status, map) {
                tracing::warn!(code = api_error.code, message = %api_error.message, "Binance API error");
                return Err(BinanceError::Api(api_error));
            }
        }
        Value::Array(_) => {
            if !status.is_success() {
                return Err(BinanceError::Api(
                    ApiError::new(0, format!("HTTP {status}")).with_status(status.as_u16()),
                ));
            }
        }
        other => {
            return Err(BinanceError::decode(
                format!("expected a JSON array or object, got {}", kind(other)),
                Some(status.as_u16()),
            ));
        }
    }

    Ok(value)
}

/// Detect an error payload in a decoded object.
fn api_error(status: StatusCode, map: &Map<String, Value>) -> Option<ApiError> {
    let code = map.get("code").and_then(error_code);
    let msg = map.get("msg").and_then(Value::as_str);
    let message = msg.unwrap_or_default().to_string();

    let error = match code {
        // A `code` next to a `msg` is an error whatever its sign.
        Some(code) if msg.is_some() => Some(ApiError::new(code, message)),
        // All Binance error codes are negative.
        Some(code) if code < 0 => Some(ApiError::new(code, message)),
        _ if map.get("success").and_then(Value::as_bool) == Some(false) => {
            Some(ApiError::new(code.unwrap_or(0), message))
        }
        _ if !status.is_success() => Some(ApiError::new(
            code.unwrap_or(0),
            if message.is_empty() {
                format!("HTTP {status}")
            } else {
                message
            },
        )),
        _ => None,
    };

    error.map(|e| e.with_status(status.as_u16()))
}

/// Read an error code sent either as a JSON number or as a numeric string.
fn error_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Deserialize a decoded value into a typed response.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, BinanceError> {
    serde_json::from_value(value)
        .map_err(|e| BinanceError::decode(format!("unexpected response shape: {e}"), None))
}

/// Take a field out of a decoded object.
pub(crate) fn take_field(mut value: Value, field: &str) -> Result<Value, BinanceError> {
    value
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| BinanceError::decode(format!("response missing '{field}' field"), None))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn truncate(body: &str) -> &str {
    const MAX: usize = 256;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
