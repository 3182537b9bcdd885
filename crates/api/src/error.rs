use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use corral_domain::DomainError;
use serde_json::json;
use tracing::error;

/// Response wrapper mapping the error taxonomy onto HTTP statuses. Handlers
/// return `Result<_, ApiError>` and use `?` on use-case calls.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::DuplicateRequest => StatusCode::CONFLICT,
            DomainError::VersionMismatch => StatusCode::PRECONDITION_FAILED,
            DomainError::InvalidPrecondition(_) => StatusCode::BAD_REQUEST,
            DomainError::CircuitOpen { .. } => StatusCode::SERVICE_UNAVAILABLE,
            DomainError::DownstreamTimeout => StatusCode::BAD_GATEWAY,
            DomainError::DownstreamFailure(_) => {
                error!(error = %self.0, "Request failed on downstream error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut response = (status, Json(json!({ "error": self.0.to_string() }))).into_response();

        if let DomainError::CircuitOpen { retry_after_secs } = self.0 {
            if let Ok(value) = HeaderValue::from_str(&retry_after_secs.max(1).to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_circuit_open_to_503_with_retry_after() {
        let response = ApiError(DomainError::CircuitOpen {
            retry_after_secs: 17,
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            &HeaderValue::from_static("17")
        );
    }

    #[test]
    fn maps_version_mismatch_to_412() {
        let response = ApiError(DomainError::VersionMismatch).into_response();
        assert_eq!(response.status(), StatusCode::PRECONDITION_FAILED);
    }
}
