//! User-facing failure reporting shared by the page controllers.

use axum::http::StatusCode;

use crate::api::ApiError;

/// The kinds of failure a visitor can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    NotFound,
    Server,
    Connection,
}

impl FailureKind {
    /// HTTP status used for the page that reports this failure.
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Server | Self::Connection => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<&ApiError> for FailureKind {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::NotFound => Self::NotFound,
            ApiError::Server { .. } | ApiError::Decode(_) => Self::Server,
            ApiError::Connection(_) => Self::Connection,
        }
    }
}

/// A title and message pair rendered in an error dialog or panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: FailureKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(kind: FailureKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}
