use std::sync::Arc;

use payment_gateway::config::AppConfig;
use payment_gateway::gateways::mock::MockBankGateway;
use payment_gateway::gateways::simulator::BankSimulatorGateway;
use payment_gateway::gateways::BankGateway;
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_service::PaymentService;
use payment_gateway::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let gateway: Arc<dyn BankGateway> = if cfg.bank_gateway_adapter == "mock" {
        Arc::new(MockBankGateway {
            behavior: cfg.bank_gateway_mock_behavior.clone(),
        })
    } else {
        Arc::new(BankSimulatorGateway {
            base_url: cfg.bank_gateway_base_url.clone(),
            client: reqwest::Client::new(),
        })
    };
    tracing::info!("bank gateway adapter: {}", gateway.name());

    let payment_service = PaymentService {
        payments_repo: PaymentsRepo::new(),
        gateway,
    };

    let app = payment_gateway::router(AppState { payment_service });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
