use chrono::{DateTime, Utc};
use client::{ApiError, ErrorKind};
use model::Settings;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Loading,
    Success,
    Error,
}

/// Where the data currently held by a view came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Demo,
}

/// What a page does with its data when a required fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Substitute the demo dataset and flag it.
    Demo,
    /// Leave data empty and show the error.
    Surface,
}

impl FallbackPolicy {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.demo_fallback {
            FallbackPolicy::Demo
        } else {
            FallbackPolicy::Surface
        }
    }

    pub fn fallback<T>(self, demo: impl FnOnce() -> T) -> Option<T> {
        match self {
            FallbackPolicy::Demo => Some(demo()),
            FallbackPolicy::Surface => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&ApiError> for ErrorInfo {
    fn from(err: &ApiError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<ApiError> for ErrorInfo {
    fn from(err: ApiError) -> Self {
        Self::from(&err)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewState<T> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<ErrorInfo>,
    pub provenance: Provenance,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            status: Status::Idle,
            data: None,
            error: None,
            provenance: Provenance::Live,
            updated_at: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn is_demo(&self) -> bool {
        self.data.is_some() && self.provenance == Provenance::Demo
    }

    /// Previous data stays visible while a refresh is in flight.
    pub(crate) fn start_loading(&mut self) {
        self.status = Status::Loading;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, data: T) {
        self.status = Status::Success;
        self.data = Some(data);
        self.error = None;
        self.provenance = Provenance::Live;
        self.updated_at = Some(Utc::now());
    }

    /// Earlier live data is dropped so it is never shown as current.
    pub(crate) fn fail(&mut self, error: ErrorInfo, fallback: Option<T>) {
        self.status = Status::Error;
        self.provenance = if fallback.is_some() {
            Provenance::Demo
        } else {
            Provenance::Live
        };
        self.data = fallback;
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_error() -> ErrorInfo {
        ErrorInfo {
            kind: ErrorKind::Network,
            message: "request to /x failed: connection failed".to_string(),
        }
    }

    #[test]
    fn test_idle_by_default() {
        let state: ViewState<u32> = ViewState::idle();
        assert_eq!(state.status, Status::Idle);
        assert!(state.data.is_none());
        assert!(!state.is_demo());
    }

    #[test]
    fn test_loading_keeps_previous_data() {
        let mut state = ViewState::idle();
        state.succeed(7);
        state.start_loading();
        assert!(state.is_loading());
        assert_eq!(state.data, Some(7));
    }

    #[test]
    fn test_failure_without_fallback_clears_data() {
        let mut state = ViewState::idle();
        state.succeed(vec![1, 2, 3]);
        state.start_loading();
        state.fail(network_error(), None);

        assert_eq!(state.status, Status::Error);
        assert!(state.data.is_none());
        assert_eq!(state.error.as_ref().map(|e| e.kind), Some(ErrorKind::Network));
        assert!(!state.is_demo());
    }

    #[test]
    fn test_failure_with_fallback_is_flagged_demo() {
        let mut state = ViewState::idle();
        state.fail(network_error(), FallbackPolicy::Demo.fallback(|| 42));
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.data, Some(42));
        assert!(state.is_demo());

        state.succeed(1);
        assert!(!state.is_demo());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_policy_from_settings() {
        let mut settings = Settings::default();
        assert_eq!(FallbackPolicy::from_settings(&settings), FallbackPolicy::Demo);
        settings.demo_fallback = false;
        assert_eq!(FallbackPolicy::from_settings(&settings), FallbackPolicy::Surface);
        assert_eq!(FallbackPolicy::Surface.fallback(|| 1), None);
    }

    #[test]
    fn test_error_info_from_api_error() {
        let err = ApiError::Validation("limit must be positive".to_string());
        let info = ErrorInfo::from(&err);
        assert_eq!(info.kind, ErrorKind::Validation);
        assert_eq!(info.message, "invalid request: limit must be positive");
    }
}
