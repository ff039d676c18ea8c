use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// JSON body of `POST /generate-seo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub urls: Vec<String>,
    pub keywords: Vec<String>,
}

/// Successful reply; both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisReply {
    pub message: String,
    pub csv: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisReply, RequestError>,
    },
    DownloadCompleted {
        request_id: RequestId,
        result: Result<PathBuf, RequestError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: FailureKind,
    pub message: String,
}

impl RequestError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The error text the collaborator put in its response body, if any.
    pub fn reported_error(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::Rejected {
                error: Some(error), ..
            } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidRequest,
    /// Non-2xx from the analysis endpoint, with the body's `error` string.
    Rejected { status: u16, error: Option<String> },
    HttpStatus(u16),
    MalformedResponse,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Timeout,
    Network,
    Persist,
    Cancelled,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::Rejected { status, .. } => write!(f, "rejected with status {status}"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Persist => write!(f, "could not save file"),
            FailureKind::Cancelled => write!(f, "cancelled"),
        }
    }
}
