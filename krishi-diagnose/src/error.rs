//! Error types for krishi-diagnose
//!
//! Domain errors are raised by the synchronous controllers and wrapped in
//! [`WorkflowError`]. [`ApiError`] turns them into JSON responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::location::LocationLevel;

/// Illegal diagnosis stage transition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StageError {
    #[error("An image is already being analyzed")]
    AnalysisInProgress,

    #[error("Results are showing; reset before submitting another image")]
    ResultsPending,

    #[error("No analysis is running")]
    NotAnalyzing,

    #[error("Analysis progress is at {0:.0}%, not complete")]
    ProgressIncomplete(f64),

    #[error("Reset is only available from results")]
    NotInResults,
}

/// Location value inconsistent with the hierarchy or with its ancestors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Unknown state '{0}'")]
    UnknownState(String),

    #[error("Unknown district '{district}' in state {state}")]
    UnknownDistrict { state: String, district: String },

    #[error("Unknown city '{city}' in district {district}")]
    UnknownCity { district: String, city: String },

    #[error("Select a {0} first")]
    AncestorMissing(LocationLevel),
}

/// Manual soil entry rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Location is incomplete: {level} is missing")]
    MissingLocation { level: LocationLevel },

    #[error("Value '{value}' for {parameter} is not a number")]
    NotNumeric { parameter: String, value: String },
}

/// Illegal soil acquisition transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SoilError {
    #[error("Soil data is already loaded; reset first")]
    AlreadyLoaded,

    #[error("Action not available on the current soil path")]
    WrongPath,

    #[error("Manual entry is not open")]
    ManualEntryClosed,

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// File rejected at the intake boundary
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Unsupported file type '{0}'")]
    UnsupportedType(String),
}

/// Analysis backend failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Analysis backend unavailable: {0}")]
    Unavailable(String),

    #[error("Image rejected by analysis backend: {0}")]
    Rejected(String),
}

/// Any failure raised while driving a workflow
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Workflow not found: {0}")]
    NotFound(uuid::Uuid),

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error(transparent)]
    Soil(#[from] SoilError),

    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl From<LocationError> for WorkflowError {
    fn from(err: LocationError) -> Self {
        WorkflowError::Soil(SoilError::Location(err))
    }
}

impl From<ValidationError> for WorkflowError {
    fn from(err: ValidationError) -> Self {
        WorkflowError::Soil(SoilError::Validation(err))
    }
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Conflict (409) - transition not allowed in the current state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// krishi-common error
    #[error("Common error: {0}")]
    Common(#[from] krishi_common::Error),
}

impl From<WorkflowError> for ApiError {
    fn from(err: WorkflowError) -> Self {
        let message = err.to_string();
        match err {
            WorkflowError::NotFound(_) => ApiError::NotFound(message),
            WorkflowError::Stage(_) => ApiError::Conflict(message),
            WorkflowError::Soil(SoilError::Location(_) | SoilError::Validation(_)) => {
                ApiError::BadRequest(message)
            }
            WorkflowError::Soil(_) => ApiError::Conflict(message),
            WorkflowError::Intake(IntakeError::UnsupportedType(_)) => ApiError::BadRequest(message),
            WorkflowError::Analysis(_) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Common(ref err) => {
                let (status, code) = match err {
                    krishi_common::Error::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    krishi_common::Error::InvalidInput(_) => {
                        (StatusCode::BAD_REQUEST, "BAD_REQUEST")
                    }
                    _ => (StatusCode::INTERNAL_SERVER_ERROR, "COMMON_ERROR"),
                };
                (status, code, err.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
