use reqwest::StatusCode;
use thiserror::Error;

use crate::client::ApiResponse;

/// Reasons a single check can fail. None of them aborts the run.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("expected status {expected}, got {}", .response.status)]
    UnexpectedStatus {
        expected: StatusCode,
        response: ApiResponse,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("{0}")]
    MissingPrecondition(&'static str),
}

impl CheckError {
    /// The server response attached to the failure, if one was received.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            CheckError::UnexpectedStatus { response, .. } => Some(response),
            _ => None,
        }
    }
}
