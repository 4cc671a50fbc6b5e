//! School request body parsing.

use serde_json::Value;
use thiserror::Error;

use crate::error::{ApiError, ErrorCode};
use crate::models::SchoolInput;

/// Reasons a school request body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("{0}")]
    Malformed(String),
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("Field \"{0}\" is required")]
    MissingField(&'static str),
    #[error("Field \"{field}\" must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Field \"{0}\" must not be empty")]
    EmptyField(&'static str),
}

impl From<BodyError> for ApiError {
    fn from(err: BodyError) -> Self {
        ApiError::with_message(ErrorCode::InvalidBody, err.to_string())
    }
}

/// Parses a create/update body into a [`SchoolInput`].
///
/// Fields other than `name` are ignored, so clients may echo back the `id`
/// they received.
pub fn parse_school_body(body: &[u8]) -> Result<SchoolInput, BodyError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| BodyError::Malformed(e.to_string()))?;
    let object = value.as_object().ok_or(BodyError::NotAnObject)?;

    match object.get("name") {
        None | Some(Value::Null) => Err(BodyError::MissingField("name")),
        Some(Value::String(name)) if name.trim().is_empty() => {
            Err(BodyError::EmptyField("name"))
        }
        Some(Value::String(name)) => Ok(SchoolInput { name: name.clone() }),
        Some(_) => Err(BodyError::WrongType {
            field: "name",
            expected: "string",
        }),
    }
}
