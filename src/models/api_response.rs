use actix_web::HttpResponse;
use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::errors::ApiError;

// Envelope shared by every facade response
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub code: u16,
    pub result: Option<T>,
    pub error: Option<ApiError>,
}

/// One balance kind of a record, as shown by the dashboard.
#[derive(Debug, Serialize)]
pub struct BalanceView {
    pub balance: BigDecimal,
    pub loaded: bool,
}

/// Result of a fetch action. `updated` is false when the token is not tracked.
#[derive(Debug, Serialize)]
pub struct FetchOutcome {
    pub token_id: String,
    pub updated: bool,
}

pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        status: "SUCCESS".to_string(),
        code: 200,
        result: Some(data),
        error: None,
    })
}
