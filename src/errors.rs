use crate::models::ErrorBody;
use reqwest::StatusCode;
use std::fmt;

pub const MISSING_INIT_DATA: &str = "Error: Telegram initData missing";
pub const MISSING_USERNAME: &str = "Please enter username";
pub const NETWORK_ERROR: &str = "Network error";

#[derive(Debug)]
pub enum ClickError {
    MissingInitData,
    MissingUsername,
    Rejected {
        status: StatusCode,
        body: Option<ErrorBody>,
    },
    Network(reqwest::Error),
    Decode(serde_json::Error),
}

impl ClickError {
    pub fn rejected(status: StatusCode, body: Option<ErrorBody>) -> Self {
        Self::Rejected { status, body }
    }

    /// Missing local input never reaches the network.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::MissingInitData | Self::MissingUsername)
    }

    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::Rejected { body: Some(body), .. } => body.retry_after_ms,
            _ => None,
        }
    }

    fn rejection_reason(status: StatusCode, body: Option<&ErrorBody>) -> String {
        body.and_then(|body| body.error.as_deref())
            .filter(|error| !error.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or(status.as_str()).to_string())
    }
}

impl fmt::Display for ClickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInitData => f.write_str(MISSING_INIT_DATA),
            Self::MissingUsername => f.write_str(MISSING_USERNAME),
            Self::Rejected { status, body } => {
                write!(f, "Error: {}", Self::rejection_reason(*status, body.as_ref()))
            }
            Self::Network(_) => f.write_str(NETWORK_ERROR),
            Self::Decode(_) => f.write_str("Error: invalid response"),
        }
    }
}

impl std::error::Error for ClickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClickError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for ClickError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}
