use std::sync::Arc;

use uuid::Uuid;

use crate::domain::payment::{PaymentDetails, PaymentStatus, PostPaymentRequest};
use crate::error::PaymentError;
use crate::gateways::{BankGateway, BankPaymentRequest};
use crate::repo::payments_repo::PaymentsRepo;
use crate::validation::validate_payment_request;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub gateway: Arc<dyn BankGateway>,
}

impl PaymentService {
    /// Full pipeline for one payment: validate, authorize with the bank,
    /// persist the outcome, return the record. Nothing is stored unless the
    /// bank round trip completes; a declined payment is stored exactly like
    /// an authorized one.
    pub async fn process(
        &self,
        request: PostPaymentRequest,
    ) -> Result<PaymentDetails, PaymentError> {
        validate_payment_request(&request)?;

        let outcome = self
            .gateway
            .authorize(BankPaymentRequest::from_payment(&request))
            .await?;

        let details = PaymentDetails {
            id: Uuid::new_v4(),
            status: if outcome.authorized {
                PaymentStatus::Authorized
            } else {
                PaymentStatus::Rejected
            },
            authorization_code: outcome.authorized.then_some(outcome.authorization_code),
            card_number_last_four: request.card_number_last_four(),
            expiry_month: request.expiry_month,
            expiry_year: request.expiry_year,
            currency: request.currency,
            amount: request.amount,
        };

        self.payments_repo.add(details.clone());
        tracing::debug!(
            payment_id = %details.id,
            gateway = self.gateway.name(),
            "payment processed"
        );

        Ok(details)
    }

    pub fn get(&self, id: Uuid) -> Result<PaymentDetails, PaymentError> {
        tracing::debug!(payment_id = %id, "payment lookup");
        self.payments_repo.get(id).ok_or(PaymentError::NotFound)
    }
}
