//! Response builders shared by the handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::models::{SummarizeFailure, SummarizeResponse};

pub const INDEX_MESSAGE: &str = "Todo Summary API is running!";

/// Returns a 200 OK with the summary and `success: true`.
#[must_use]
pub fn ok_summary(summary: String) -> Response {
    Json(SummarizeResponse {
        success: true,
        summary,
    })
    .into_response()
}

/// Returns a 500 with `success: false` and the failure message. No summary
/// field is present, even when one was generated before the failure.
#[must_use]
pub fn err_summary(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SummarizeFailure {
            success: false,
            error: message,
        }),
    )
        .into_response()
}
