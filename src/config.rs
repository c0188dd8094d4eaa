#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_gateway_base_url: String,
    pub bank_gateway_adapter: String,
    pub bank_gateway_mock_behavior: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            bank_gateway_base_url: std::env::var("BANK_GATEWAY_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            bank_gateway_adapter: std::env::var("BANK_GATEWAY_ADAPTER")
                .unwrap_or_else(|_| "simulator".to_string()),
            bank_gateway_mock_behavior: std::env::var("BANK_GATEWAY_MOCK_BEHAVIOR")
                .unwrap_or_else(|_| "ALWAYS_AUTHORIZE".to_string()),
        }
    }
}
