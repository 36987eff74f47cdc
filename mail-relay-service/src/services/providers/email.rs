use super::{EmailMessage, EmailProvider, ProviderError, ProviderResponse};
use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;
use std::sync::Mutex;

pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
    pub fn new(config: &SmtpConfig) -> Result<Self, ProviderError> {
        let builder = if config.use_ssl {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host).map_err(|e| {
                ProviderError::Configuration(format!("Failed to create SMTPS relay: {}", e))
            })?
        } else if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host).map_err(|e| {
                ProviderError::Configuration(format!("Failed to create STARTTLS relay: {}", e))
            })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        let mut builder = builder.port(config.port);
        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.expose_secret().clone(),
            ));
        }

        tracing::info!(
            host = %config.host,
            port = config.port,
            tls = config.use_tls,
            ssl = config.use_ssl,
            "SMTP transport configured"
        );

        Ok(Self {
            transport: builder.build(),
        })
    }
}

/// Build the single-part plain-text message lettre submits.
fn build_message(email: &EmailMessage) -> Result<Message, ProviderError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|e| ProviderError::InvalidAddress(format!("sender '{}': {}", email.from, e)))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| ProviderError::InvalidAddress(format!("recipient '{}': {}", email.to, e)))?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(&email.subject)
        .header(ContentType::TEXT_PLAIN)
        .body(email.body.clone())
        .map_err(|e| ProviderError::MessageBuild(e.to_string()))
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailMessage) -> Result<ProviderResponse, ProviderError> {
        let message = build_message(email)?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| ProviderError::SendFailed(format!("Failed to send email: {}", e)))?;

        let provider_id = response.message().next().map(|s| s.to_string());

        tracing::info!(to = %email.to, "Email accepted by relay");

        Ok(ProviderResponse { provider_id })
    }
}

/// Records messages instead of sending them.
#[derive(Default)]
pub struct MockEmailProvider {
    failure: Option<ProviderError>,
    sent: Mutex<Vec<EmailMessage>>,
}

impl MockEmailProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every `send` fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            failure: Some(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &EmailMessage) -> Result<ProviderResponse, ProviderError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        // Validate the addresses exactly as the real transport would.
        build_message(email)?;

        let count = match self.sent.lock() {
            Ok(mut sent) => {
                sent.push(email.clone());
                sent.len()
            }
            Err(_) => {
                return Err(ProviderError::SendFailed(
                    "mock outbox lock poisoned".to_string(),
                ))
            }
        };

        tracing::info!(to = %email.to, "[MOCK] Email would be sent");

        Ok(ProviderResponse {
            provider_id: Some(format!("mock-email-{}", count)),
        })
    }
}
