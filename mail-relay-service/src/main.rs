use mail_relay_service::config::MailRelayConfig;
use mail_relay_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("mail-relay-service", "info", otlp_endpoint.as_deref())?;

    init_metrics().map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;

    let config = MailRelayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow::anyhow!("Startup error: {}", e))?;

    let result = app.run_until_stopped().await;
    shutdown_tracing();
    result?;

    Ok(())
}
