use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponseError(String),

    #[error("No account is signed in")]
    NotSignedIn,

    #[error("Token not found: {0}")]
    TokenNotFoundError(String),

    #[error("Invalid amount: {0}")]
    InvalidAmountError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for CustomError {
    fn from(err: reqwest::Error) -> Self {
        CustomError::NetworkError(err.to_string())
    }
}

// Error body carried inside the ApiResponse envelope
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::NetworkError(_) => StatusCode::BAD_GATEWAY,
            CustomError::InvalidResponseError(_) => StatusCode::BAD_GATEWAY,
            CustomError::NotSignedIn => StatusCode::UNAUTHORIZED,
            CustomError::TokenNotFoundError(_) => StatusCode::NOT_FOUND,
            CustomError::InvalidAmountError(_) => StatusCode::BAD_REQUEST,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        };

        HttpResponse::build(status).json(ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        })
    }
}
