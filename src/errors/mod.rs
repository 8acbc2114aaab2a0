use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{ERR_USER_EXISTS, ERR_VALIDATION_FAILED};
use crate::models::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::Conflict(message) => HttpResponse::Conflict().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    message: message.clone(),
                    errors: None,
                })
            }
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            }),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        // The unique index on `username` is the actual race guard for
        // concurrent creates; surface its violation as a conflict.
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict(ERR_USER_EXISTS.to_string())
            }
            _ => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn test_error_response_status_codes() {
        let cases = [
            (
                ApiError::BadRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::NotFound("missing".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Conflict("taken".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::InternalServerError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::ValidationError(vec!["Username is required".to_string()]),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected);
        }
    }

    #[test]
    fn test_row_not_found_maps_to_internal_error() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, ApiError::InternalServerError(_)));
    }
}
