use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::domain::payment::{PaymentResponse, PostPaymentRequest};
use crate::error::PaymentError;
use crate::AppState;

pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({"message": "pong"}))
}

pub async fn create_payment(
    State(state): State<AppState>,
    payload: Result<Json<PostPaymentRequest>, JsonRejection>,
) -> Result<Json<PaymentResponse>, PaymentError> {
    // A shape mismatch is a format failure, distinct from business validation.
    let Json(request) =
        payload.map_err(|rejection| PaymentError::RequestFormat(rejection.body_text()))?;

    let details = state.payment_service.process(request).await?;
    Ok(Json(PaymentResponse::from(&details)))
}

pub async fn get_payment(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<PaymentResponse>, PaymentError> {
    let Path(id) = id.map_err(|rejection| PaymentError::RequestFormat(rejection.body_text()))?;

    let details = state.payment_service.get(id)?;
    Ok(Json(PaymentResponse::from(&details)))
}
