use serde::{Deserialize, Serialize};

/// Subject line of every relayed email.
pub const NOTIFICATION_SUBJECT: &str = "Notificación";

/// Body of `POST /notificaciones`. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRequest {
    pub email: String,
    pub mensaje: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
