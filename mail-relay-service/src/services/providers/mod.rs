pub mod email;

use async_trait::async_trait;
use service_core::error::AppError;
use thiserror::Error;

use crate::models::{NotificationRequest, NOTIFICATION_SUBJECT};

pub use email::{MockEmailProvider, SmtpProvider};

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Message build error: {0}")]
    MessageBuild(String),

    #[error("Send error: {0}")]
    SendFailed(String),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::EmailError(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// First line of the relay's final reply, when it sent one.
    pub provider_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    /// The email relayed for one notification request.
    pub fn notification(sender: &str, request: NotificationRequest) -> Self {
        Self {
            from: sender.to_string(),
            to: request.email,
            subject: NOTIFICATION_SUBJECT.to_string(),
            body: request.mensaje,
        }
    }
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<ProviderResponse, ProviderError>;
}
