use std::fmt;

use jobby_core::{JobDetailsPage, JobList, Profile, RequestId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Text to show on the login form. Only a rejection carries a message
    /// meant for the user.
    pub fn user_message(&self) -> String {
        match self.kind {
            FailureKind::Rejected => self.message.clone(),
            _ => format!("login failed ({})", self.kind),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start tokio runtime: {0}")]
    Runtime(std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    /// The API answered with an `error_msg`.
    Rejected,
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Rejected => write!(f, "rejected"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LoginCompleted {
        result: Result<String, ApiError>,
    },
    ProfileCompleted {
        request: RequestId,
        result: Result<Profile, ApiError>,
    },
    JobsCompleted {
        request: RequestId,
        result: Result<JobList, ApiError>,
    },
    JobDetailsCompleted {
        request: RequestId,
        result: Result<JobDetailsPage, ApiError>,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub jwt_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error_msg: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEnvelope {
    pub profile_details: Profile,
}
