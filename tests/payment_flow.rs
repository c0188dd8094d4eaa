use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use payment_gateway::domain::payment::{PaymentStatus, PostPaymentRequest};
use payment_gateway::error::PaymentError;
use payment_gateway::gateways::mock::MockBankGateway;
use payment_gateway::gateways::{BankGateway, BankOutcome, BankPaymentRequest};
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_service::PaymentService;
use uuid::Uuid;

/// Returns a fixed authorization and counts how often it is called.
struct CountingGateway {
    calls: Arc<AtomicUsize>,
    authorized: bool,
}

#[async_trait]
impl BankGateway for CountingGateway {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn authorize(&self, _request: BankPaymentRequest) -> Result<BankOutcome, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(BankOutcome {
            authorized: self.authorized,
            authorization_code: "ABC123".to_string(),
        })
    }
}

#[tokio::test]
async fn authorized_payment_is_recorded_and_retrievable() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = service_with(Arc::new(CountingGateway {
        calls: calls.clone(),
        authorized: true,
    }));
    let request = valid_request();

    let details = service.process(request.clone()).await.unwrap();

    assert_eq!(details.status, PaymentStatus::Authorized);
    assert_eq!(details.authorization_code.as_deref(), Some("ABC123"));
    assert_eq!(details.card_number_last_four, 1111);
    assert_eq!(details.expiry_month, request.expiry_month);
    assert_eq!(details.expiry_year, request.expiry_year);
    assert_eq!(details.currency, "USD");
    assert_eq!(details.amount, 10);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let fetched = service.get(details.id).unwrap();
    assert_eq!(fetched.id, details.id);
    assert_eq!(fetched.status, PaymentStatus::Authorized);
    assert_eq!(fetched.authorization_code.as_deref(), Some("ABC123"));
    assert_eq!(fetched.card_number_last_four, 1111);
    assert_eq!(fetched.currency, "USD");
    assert_eq!(fetched.amount, 10);
}

#[tokio::test]
async fn declined_payment_is_recorded_without_an_authorization_code() {
    let service = service_with(Arc::new(CountingGateway {
        calls: Arc::new(AtomicUsize::new(0)),
        authorized: false,
    }));

    let details = service.process(valid_request()).await.unwrap();

    assert_eq!(details.status, PaymentStatus::Rejected);
    assert!(details.authorization_code.is_none());

    let fetched = service.get(details.id).unwrap();
    assert_eq!(fetched.status, PaymentStatus::Rejected);
    assert!(fetched.authorization_code.is_none());
}

#[tokio::test]
async fn mock_gateway_decline_behavior_flows_through() {
    let service = service_with(Arc::new(MockBankGateway {
        behavior: "ALWAYS_DECLINE".to_string(),
    }));

    let details = service.process(valid_request()).await.unwrap();
    assert_eq!(details.status, PaymentStatus::Rejected);
    assert!(details.authorization_code.is_none());
}

#[tokio::test]
async fn invalid_request_never_reaches_the_gateway() {
    let calls = Arc::new(AtomicUsize::new(0));
    let service = service_with(Arc::new(CountingGateway {
        calls: calls.clone(),
        authorized: true,
    }));

    let mut request = valid_request();
    request.card_number = "1234".to_string();

    match service.process(request).await {
        Err(PaymentError::Validation(reason)) => {
            assert!(reason.starts_with("Card number"), "unexpected reason: {reason}")
        }
        other => panic!("expected a validation failure, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn gateway_failure_persists_nothing() {
    let service = service_with(Arc::new(MockBankGateway {
        behavior: "ALWAYS_ERROR".to_string(),
    }));

    match service.process(valid_request()).await {
        Err(PaymentError::Gateway(_)) => {}
        other => panic!("expected a gateway failure, got {other:?}"),
    }

    // No id was ever issued for the failed attempt, so every lookup misses.
    assert!(matches!(
        service.get(Uuid::new_v4()),
        Err(PaymentError::NotFound)
    ));
}

#[tokio::test]
async fn unknown_id_lookup_is_not_found() {
    let service = service_with(Arc::new(MockBankGateway {
        behavior: "ALWAYS_AUTHORIZE".to_string(),
    }));

    assert!(matches!(
        service.get(Uuid::new_v4()),
        Err(PaymentError::NotFound)
    ));
}

fn service_with(gateway: Arc<dyn BankGateway>) -> PaymentService {
    PaymentService {
        payments_repo: PaymentsRepo::new(),
        gateway,
    }
}

fn valid_request() -> PostPaymentRequest {
    PostPaymentRequest {
        card_number: "1111111111111111".to_string(),
        expiry_month: 12,
        // Wall-clock validation runs inside process(), so stay within the
        // allowed expiry window whenever the tests execute.
        expiry_year: chrono::Local::now().year() + 1,
        currency: "USD".to_string(),
        amount: 10,
        cvv: 123,
    }
}
