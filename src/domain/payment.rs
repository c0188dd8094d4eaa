use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Authorized,
    Rejected,
}

/// Inbound payment request, exactly as received. No invariants hold until
/// validation has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPaymentRequest {
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: i32,
}

impl PostPaymentRequest {
    /// Expiry the way the bank wire format wants it: two-digit month, slash,
    /// full year.
    pub fn expiry_date(&self) -> String {
        format!("{:02}/{}", self.expiry_month, self.expiry_year)
    }

    /// Numeric value of the trailing four digits. Leading zeros are lost.
    /// Only meaningful once the card number has passed validation.
    pub fn card_number_last_four(&self) -> i32 {
        let start = self.card_number.len().saturating_sub(4);
        self.card_number[start..].parse().unwrap_or_default()
    }
}

/// Persisted record of one processed payment. Immutable once stored; the
/// authorization code is present only for authorized payments.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDetails {
    pub id: Uuid,
    pub status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<String>,
    pub card_number_last_four: i32,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

/// Outward shape for both create and fetch. Never carries the authorization
/// code, whatever the status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Uuid,
    pub status: PaymentStatus,
    pub card_number_last_four: i32,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

impl From<&PaymentDetails> for PaymentResponse {
    fn from(details: &PaymentDetails) -> Self {
        Self {
            id: details.id,
            status: details.status.clone(),
            card_number_last_four: details.card_number_last_four,
            expiry_month: details.expiry_month,
            expiry_year: details.expiry_year,
            currency: details.currency.clone(),
            amount: details.amount,
        }
    }
}
