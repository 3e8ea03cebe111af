use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prelude::*;
use crate::web::validation::ValidationError;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
}

impl StatusResponse {
    pub fn running() -> Self {
        Self {
            message: "ML API v1.0".to_string(),
            status: "running".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct InfoResponse {
    pub model: String,
    pub author: String,
    pub version: String,
}

impl InfoResponse {
    pub fn current() -> Self {
        Self {
            model: crate::model::NAME.to_string(),
            author: crate::model::AUTHOR.to_string(),
            version: crate::model::VERSION.to_string(),
        }
    }
}

/// Prediction input.
///
/// Besides JSON numbers, `value` may be a string holding a number, like `"3.5"`,
/// or a boolean, which counts as `1.0` or `0.0`.
#[derive(Debug, PartialEq)]
pub struct PredictRequest {
    pub value: f64,
}

impl TryFrom<&[u8]> for PredictRequest {
    type Error = ValidationError;

    fn try_from(body: &[u8]) -> StdResult<Self, Self::Error> {
        if body.is_empty() {
            return Err(ValidationError::MissingBody);
        }
        let mut fields = match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => fields,
            _ => return Err(ValidationError::NotAnObject),
        };
        let value = match fields.remove("value") {
            None => return Err(ValidationError::MissingField("value")),
            Some(Value::Number(number)) => number
                .as_f64()
                .ok_or(ValidationError::InvalidNumberType("value"))?,
            Some(Value::String(string)) => string
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::UnparsableNumber("value"))?,
            Some(Value::Bool(flag)) => f64::from(u8::from(flag)),
            Some(_) => return Err(ValidationError::InvalidNumberType("value")),
        };
        Ok(Self { value })
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PredictResponse {
    pub input: f64,
    pub prediction: f64,
}

/// Error body, `{"detail": ...}`.
#[derive(Serialize)]
pub struct DetailResponse<T> {
    pub detail: T,
}
