use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

/// Caller-facing error taxonomy. Each variant maps to exactly one HTTP
/// status; missing and invalid credentials are deliberately collapsed into
/// `AuthenticationFailed` since the caller cannot act differently on either.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found")]
    NotFound,

    #[error("Forbidden")]
    Forbidden,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(e: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};
        match e {
            Error::NotFound => AppError::NotFound,
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::Conflict(info.message().to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for AppError {
    fn from(e: r2d2::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Store failures are logged but never echoed back to the caller.
        let message = match self {
            AppError::Internal(detail) => {
                log::error!("internal error: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn authentication_failed_returns_401() {
        let resp = AppError::AuthenticationFailed.error_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn invalid_input_returns_400() {
        let resp = AppError::InvalidInput("bad order id".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn forbidden_returns_403() {
        let resp = AppError::Forbidden.error_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn conflict_returns_409() {
        let resp = AppError::Conflict("duplicate email".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("connection refused".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_leaked() {
        let err = AppError::Internal("connection refused".to_string());
        // Display carries the detail for logs; the response body must not.
        assert_eq!(err.to_string(), "Internal error: connection refused");
    }

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let app_err: AppError = diesel::result::Error::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn forbidden_display() {
        assert_eq!(AppError::Forbidden.to_string(), "Forbidden");
    }
}
