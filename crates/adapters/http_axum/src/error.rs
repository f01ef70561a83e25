//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use cityinfo_domain::error::{CityInfoError, PatchFailure};

/// JSON error body returned by API endpoints.
///
/// `details` is only present for patch failures, where each entry names
/// the failed operation, its path, and the reason.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<PatchFailure>>,
}

/// Maps [`CityInfoError`] to an HTTP response with appropriate status code.
pub struct ApiError(CityInfoError);

impl From<CityInfoError> for ApiError {
    fn from(err: CityInfoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self.0 {
            CityInfoError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string(), None),
            CityInfoError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string(), None),
            CityInfoError::Patch(err) => {
                let message = err.to_string();
                (StatusCode::BAD_REQUEST, message, Some(err.failures))
            }
            CityInfoError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    None,
                )
            }
        };

        (status, Json(ErrorBody { error: message, details })).into_response()
    }
}
