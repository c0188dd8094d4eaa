use async_trait::async_trait;

use crate::error::PaymentError;
use crate::gateways::{BankGateway, BankOutcome, BankPaymentRequest};

/// HTTP client for the acquiring bank simulator.
pub struct BankSimulatorGateway {
    pub base_url: String,
    pub client: reqwest::Client,
}

#[async_trait]
impl BankGateway for BankSimulatorGateway {
    fn name(&self) -> &'static str {
        "bank_simulator"
    }

    async fn authorize(&self, request: BankPaymentRequest) -> Result<BankOutcome, PaymentError> {
        let url = format!("{}/payments", self.base_url);

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                PaymentError::Gateway(format!("error communicating with bank gateway: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            PaymentError::Gateway(format!("error reading bank gateway response: {e}"))
        })?;

        if !status.is_success() {
            return Err(PaymentError::Gateway(format!(
                "error from bank gateway: {} - {}",
                status.as_u16(),
                body
            )));
        }

        serde_json::from_str(&body).map_err(|_| {
            PaymentError::Gateway(format!("malformed response from bank gateway: {body}"))
        })
    }
}
