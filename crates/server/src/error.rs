use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use serde_json::json;

/// HTTP-facing error: every handler failure becomes one of these four
/// shapes and renders as a `{"message": ...}` JSON body.
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    NotFound(String),
    Validation(String),
    Conflict(String),
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::Validation(message) | Self::Conflict(message) => {
                message
            }
            Self::Internal => "internal server error",
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(resource) => Self::NotFound(format!("{resource} not found")),
            ServiceError::Validation(message) => Self::Validation(message),
            ServiceError::Conflict(message) => Self::Conflict(message),
            // Database error text stays in the logs, not in the response body
            ServiceError::Database(db_err) => {
                log::error!("database error: {db_err}");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.message() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("student not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::validation("bad input").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Conflict("duplicate".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(ApiError::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_service_error_conversion() {
        let err: ApiError = ServiceError::NotFound("student").into();
        assert_eq!(err, ApiError::NotFound("student not found".into()));

        let err: ApiError = ServiceError::conflict("duplicate submission").into();
        assert_eq!(err, ApiError::Conflict("duplicate submission".into()));
    }

    #[test]
    fn test_database_error_is_not_echoed() {
        let err: ApiError = ServiceError::Database(DbErr::Custom(
            "connection refused at 10.0.0.1".into(),
        ))
        .into();
        assert_eq!(err, ApiError::Internal);
        assert_eq!(err.message(), "internal server error");
    }
}
