use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PaymentError;
use crate::gateways::{BankGateway, BankOutcome, BankPaymentRequest};

/// Canned-behavior gateway for local runs and tests. Anything other than the
/// recognized behaviors authorizes.
pub struct MockBankGateway {
    pub behavior: String,
}

#[async_trait]
impl BankGateway for MockBankGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn authorize(&self, _request: BankPaymentRequest) -> Result<BankOutcome, PaymentError> {
        match self.behavior.as_str() {
            "ALWAYS_DECLINE" => Ok(BankOutcome {
                authorized: false,
                authorization_code: String::new(),
            }),
            "ALWAYS_ERROR" => Err(PaymentError::Gateway(
                "mock bank gateway error".to_string(),
            )),
            _ => Ok(BankOutcome {
                authorized: true,
                authorization_code: format!("mock_auth_{}", Uuid::new_v4()),
            }),
        }
    }
}
