use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal failure kinds for a payment request. None of these are retried.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// The inbound payload did not match the expected shape, before any
    /// business rule ran.
    #[error("invalid payment request format: {0}")]
    RequestFormat(String),

    /// A business validation rule was violated; carries the first failing
    /// rule's reason.
    #[error("{0}")]
    Validation(String),

    /// Any failure talking to the bank gateway: transport, status, or
    /// response shape. The detail is logged, never returned to the caller.
    #[error("bank gateway failure: {0}")]
    Gateway(String),

    #[error("no payment found for the requested id")]
    NotFound,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PaymentError::RequestFormat(_) | PaymentError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "Rejected: Invalid payment request")
            }
            PaymentError::Gateway(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error processing payment")
            }
            PaymentError::NotFound => (StatusCode::NOT_FOUND, "Page not found"),
        };

        tracing::error!("payment request failed: {}", self);

        (
            status,
            Json(ErrorResponse {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
