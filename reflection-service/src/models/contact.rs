use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound contact submission. Every field is optional and forwarded as-is.
///
/// A key that is present keeps its value, `null` included; only missing keys
/// are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default, deserialize_with = "present")]
    pub q1: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub a1: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub q2: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub a2: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub q3: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub a3: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub reflection: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub contact_method: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub contact_info: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Row sent to the spreadsheet webhook. Absent fields are left out; explicit
/// nulls are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRecord {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q2: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a2: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q3: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a3: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_method: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<Value>,
}

impl ContactRecord {
    pub fn new(payload: ContactPayload, at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            q1: payload.q1,
            a1: payload.a1,
            q2: payload.q2,
            a2: payload.a2,
            q3: payload.q3,
            a3: payload.a3,
            reflection: payload.reflection,
            contact_method: payload.contact_method,
            contact_info: payload.contact_info,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub ok: bool,
}
