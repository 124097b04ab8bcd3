use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Coarse classification shown to users in place of raw error chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Http,
    Parse,
    Validation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Network => "network",
            ErrorKind::Http => "http",
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
        })
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (refused, DNS, timeout, body cut short).
    #[error("request to {path} failed: {message}")]
    Network { path: String, message: String },

    #[error("{path} returned HTTP {status}")]
    Http {
        path: String,
        status: u16,
        body: String,
    },

    #[error("{path} returned malformed JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request: {0}")]
    Validation(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::Parse { .. } => ErrorKind::Parse,
            ApiError::Validation(_) => ErrorKind::Validation,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn network(path: &str, err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        ApiError::Network {
            path: path.to_string(),
            message,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        let err = ApiError::Http {
            path: "/api/customers".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "/api/customers returned HTTP 503");

        let err = ApiError::Validation("limit must be positive".to_string());
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ApiError::Parse {
            path: "/health".to_string(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Network.to_string(), "network");
        assert_eq!(
            serde_json::to_string(&ErrorKind::Validation).unwrap(),
            "\"validation\""
        );
    }
}
