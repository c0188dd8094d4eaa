pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_service;
}
pub mod validation;

use axum::routing::{get, post};
use axum::Router;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::payments::ping))
        .route("/payment", post(http::handlers::payments::create_payment))
        .route("/payment/:id", get(http::handlers::payments::get_payment))
        .with_state(state)
}
