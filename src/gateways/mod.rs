use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::payment::PostPaymentRequest;
use crate::error::PaymentError;

pub mod mock;
pub mod simulator;

/// Wire shape the acquiring bank expects for an authorization attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankPaymentRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: i32,
}

impl BankPaymentRequest {
    pub fn from_payment(request: &PostPaymentRequest) -> Self {
        Self {
            card_number: request.card_number.clone(),
            expiry_date: request.expiry_date(),
            currency: request.currency.clone(),
            amount: request.amount,
            cvv: request.cvv,
        }
    }
}

/// Bank verdict for one authorization attempt. `authorization_code` is only
/// meaningful when `authorized` is true; the bank may send a placeholder
/// otherwise, so its presence proves nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankOutcome {
    pub authorized: bool,
    pub authorization_code: String,
}

#[async_trait]
pub trait BankGateway: Send + Sync {
    fn name(&self) -> &'static str;

    /// One synchronous round trip, no retry. Every downstream failure mode
    /// (transport, status, response shape) surfaces as `PaymentError::Gateway`.
    async fn authorize(&self, request: BankPaymentRequest) -> Result<BankOutcome, PaymentError>;
}
