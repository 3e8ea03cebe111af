use poem::http::StatusCode;
use poem::web::Json;
use poem::{IntoResponse, Response};
use serde::Serialize;

use crate::web::models::DetailResponse;

/// Request body does not match the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("JSON decode error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Field required")]
    MissingBody,

    #[error("Input should be a valid dictionary or object to extract fields from")]
    NotAnObject,

    #[error("Field required")]
    MissingField(&'static str),

    #[error("Input should be a valid number, unable to parse string as a number")]
    UnparsableNumber(&'static str),

    #[error("Input should be a valid number")]
    InvalidNumberType(&'static str),
}

impl ValidationError {
    /// Machine-readable error type.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "json_invalid",
            Self::MissingBody => "missing",
            Self::NotAnObject => "model_attributes_type",
            Self::MissingField(_) => "missing",
            Self::UnparsableNumber(_) => "float_parsing",
            Self::InvalidNumberType(_) => "float_type",
        }
    }

    /// Path to the offending part of the request.
    pub fn location(&self) -> Vec<&'static str> {
        match self {
            Self::InvalidJson(_) | Self::MissingBody | Self::NotAnObject => vec!["body"],
            Self::MissingField(field)
            | Self::UnparsableNumber(field)
            | Self::InvalidNumberType(field) => vec!["body", *field],
        }
    }
}

#[derive(Serialize)]
struct ErrorDetail {
    loc: Vec<&'static str>,
    msg: String,

    #[serde(rename = "type")]
    kind: &'static str,
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let detail = ErrorDetail {
            loc: self.location(),
            msg: self.to_string(),
            kind: self.kind(),
        };
        Json(DetailResponse {
            detail: vec![detail],
        })
        .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        .into_response()
    }
}
