//! API error body.
//!
//! Successful responses reuse [`crate::report::Summary`], whose request and
//! result field names are the calculator's own.

use serde::Serialize;

use crate::sizing::error::SizingError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error tag, when the calculator rejected the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl From<&SizingError> for ErrorResponse {
    fn from(e: &SizingError) -> Self {
        Self {
            error: e.to_string(),
            kind: Some(e.kind()),
        }
    }
}
