use crate::domain::{RequestSchema, UsageError, ValueKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Fixed `error` field of every usage error envelope.
pub const USAGE_ERROR: &str = "usage error";

// Request payload for decoding the QR code behind a URL.
#[derive(Debug, Deserialize)]
pub struct DecodeRequest {
    pub url: String,
}

impl DecodeRequest {
    pub fn schema() -> RequestSchema {
        RequestSchema::new().require("url", ValueKind::String)
    }

    // Validate an untyped body and pull out the typed request.
    pub fn from_body(body: &Value) -> Result<Self, UsageError> {
        Self::schema().validate(body)?;

        let url = body
            .get("url")
            .and_then(Value::as_str)
            .ok_or_else(|| UsageError::MissingKey {
                key: "url".to_string(),
            })?;

        Ok(Self {
            url: url.to_string(),
        })
    }
}

// Response payload: the echoed URL and the decoded text ("" when nothing was read).
#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    pub url: String,
    pub text: String,
}

// Error envelope for request shape violations.
#[derive(Debug, Serialize)]
pub struct UsageErrorResponse {
    pub error: String,
    pub code: u8,
    pub message: String,
}

impl From<&UsageError> for UsageErrorResponse {
    fn from(err: &UsageError) -> Self {
        Self {
            error: USAGE_ERROR.to_string(),
            code: err.code(),
            message: err.message(),
        }
    }
}
