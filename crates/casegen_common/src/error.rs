//! Error types for casegen.

use thiserror::Error;

/// Errors produced while generating test cases.
///
/// Empty results are deliberately not represented here: a reply whose
/// `test_cases` list is missing or empty is an empty report, not a failure.
#[derive(Error, Debug)]
pub enum CasegenError {
    /// Missing or invalid credential/configuration. No network call is
    /// attempted in this state.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Any failure during the network exchange. Never retried.
    #[error("Remote call failed: {0}")]
    RemoteCall(String),

    /// The response text is not valid JSON. The original text rides along
    /// so it is never lost to the caller.
    #[error("Response is not valid JSON: {reason}")]
    MalformedResponse { reason: String, raw: String },
}

impl CasegenError {
    /// Stable error class name, used by the HTTP API error body.
    pub fn kind(&self) -> &'static str {
        match self {
            CasegenError::Configuration(_) => "configuration",
            CasegenError::RemoteCall(_) => "remote_call",
            CasegenError::MalformedResponse { .. } => "malformed_response",
        }
    }
}
