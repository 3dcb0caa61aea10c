use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Service(err) => match err {
                ServiceError::ValidationFailed(_) | ServiceError::DuplicateNickname(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ServiceError::MissingCriteria => StatusCode::BAD_REQUEST,
                ServiceError::StoreUnavailable(_) | ServiceError::CacheUnavailable(_) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = %status, "request rejected");
        }
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{CacheError, StorageError, ValidationError};

    #[test]
    fn client_errors() {
        let invalid = AppError::from(ServiceError::from(ValidationError::InvalidDateShape(
            "x".to_string(),
        )));
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let duplicate = AppError::from(ServiceError::DuplicateNickname("joao".to_string()));
        assert_eq!(duplicate.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let missing = AppError::from(ServiceError::MissingCriteria);
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_errors_are_unavailable() {
        let store = AppError::from(ServiceError::from(StorageError::Unavailable(
            "down".to_string(),
        )));
        let cache = AppError::from(ServiceError::from(CacheError::Timeout("slow".to_string())));

        assert_eq!(store.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(cache.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
