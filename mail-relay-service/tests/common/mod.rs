use mail_relay_service::config::{MailRelayConfig, SmtpConfig};
use mail_relay_service::services::MockEmailProvider;
use mail_relay_service::startup::{AppState, Application};
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const SENDER: &str = "relay@example.com";

pub fn test_state(provider: Arc<MockEmailProvider>) -> AppState {
    AppState {
        sender: SENDER.to_string(),
        email_provider: provider,
    }
}

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockEmailProvider>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = MailRelayConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            smtp: SmtpConfig {
                host: "smtp.test.local".to_string(),
                port: 587,
                use_tls: true,
                use_ssl: false,
                username: SENDER.to_string(),
                password: Secret::new("test".to_string()),
            },
        };

        let provider = Arc::new(MockEmailProvider::new());
        let app = Application::build_with_state(config, test_state(provider.clone()))
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, provider }
    }
}
