//! DTO pieces shared across areas.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{"success": true, "message": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Accepts an integer, a numeric string or null.
///
/// Pages post ages straight from text inputs. Anything that is not a whole
/// number in `i32` range becomes `None` and is caught by domain validation.
pub fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_i32))
}

/// Same as `lenient_i32` for ids.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_as_i64))
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn value_as_i32(value: &Value) -> Option<i32> {
    value_as_i64(value).and_then(|n| i32::try_from(n).ok())
}
