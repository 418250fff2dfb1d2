use crate::services::api::ApiError;

pub const NOT_FOUND_MESSAGE: &str =
    "User ID not found in the database. Please check the ID and try again.";
pub const ENGINE_DOWN_MESSAGE: &str = "Failed to connect to the prediction engine.";
pub const SECONDARY_DOWN_MESSAGE: &str = "Failed to load supporting analysis data.";
pub const FALLBACK_MESSAGE: &str = "An error occurred while fetching data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ServiceUnavailable,
    Unknown,
}

impl ErrorKind {
    /// Stable machine code for the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorKind::Unknown => "UNKNOWN",
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct LookupError {
    pub kind: ErrorKind,
    pub message: String,
}

/// A failed prediction call invalidates the whole lookup. 404 means the id
/// itself is wrong; everything else transport- or server-side.
pub fn classify_prediction_failure(err: ApiError) -> LookupError {
    match err {
        ApiError::Status { status: 404, .. } => LookupError {
            kind: ErrorKind::NotFound,
            message: NOT_FOUND_MESSAGE.to_string(),
        },
        ApiError::Status { .. } | ApiError::Transport { .. } => LookupError {
            kind: ErrorKind::ServiceUnavailable,
            message: ENGINE_DOWN_MESSAGE.to_string(),
        },
        other => unknown_failure(other),
    }
}

/// Explanation and statistics failures share one generic message; which of
/// the two failed is not distinguished.
pub fn classify_secondary_failure(err: ApiError) -> LookupError {
    match err {
        ApiError::Status { .. } | ApiError::Transport { .. } => LookupError {
            kind: ErrorKind::ServiceUnavailable,
            message: SECONDARY_DOWN_MESSAGE.to_string(),
        },
        other => unknown_failure(other),
    }
}

pub fn unknown_failure(err: impl std::fmt::Display) -> LookupError {
    let detail = err.to_string();
    let message = if detail.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        detail
    };
    log::error!("unclassified lookup failure: {}", message);
    LookupError {
        kind: ErrorKind::Unknown,
        message,
    }
}
