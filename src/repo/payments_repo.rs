use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::payment::PaymentDetails;

/// Process-scoped payment store keyed by id. Records are immutable once
/// added, and a fresh id is minted per payment, so overwrites do not happen
/// in practice. No eviction, no capacity bound.
#[derive(Clone, Default)]
pub struct PaymentsRepo {
    payments: Arc<DashMap<Uuid, PaymentDetails>>,
}

impl PaymentsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, payment: PaymentDetails) {
        self.payments.insert(payment.id, payment);
    }

    pub fn get(&self, id: Uuid) -> Option<PaymentDetails> {
        self.payments.get(&id).map(|entry| entry.clone())
    }
}
