//! Record model as served by `GET /records`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// server-assigned record identity
pub type RecordId = u64;

/// patient record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub age: Age,
    pub gender: String,
    pub disease: String,
}

/// age as sent by the service
///
/// the service stores whatever was submitted, so it may arrive as a json
/// string ("30") or a number (30). kept as text for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AgeRepr", into = "String")]
pub struct Age(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum AgeRepr {
    Text(String),
    Number(serde_json::Number),
}

impl From<AgeRepr> for Age {
    fn from(repr: AgeRepr) -> Self {
        match repr {
            AgeRepr::Text(s) => Age(s),
            AgeRepr::Number(n) => Age(n.to_string()),
        }
    }
}

impl From<Age> for String {
    fn from(age: Age) -> Self {
        age.0
    }
}

impl From<&str> for Age {
    fn from(s: &str) -> Self {
        Age(s.to_string())
    }
}

impl Age {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a `GET /records` body.
///
/// Anything that is valid json but not an array yields an empty list, which
/// renders as "No Records Found.". Invalid json, or array elements that are
/// not records, are parse errors.
pub fn parse_record_list(body: &str) -> Result<Vec<Record>, ClientError> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ => Ok(Vec::new()),
    }
}
