use axum::{extract::State, Json};
use metrics::counter;
use service_core::error::AppError;
use service_core::extract::AppJson;

use crate::models::{NotificationRequest, StatusResponse};
use crate::services::EmailMessage;
use crate::startup::AppState;

/// Relay one notification as an email. Any failure is an opaque 500.
#[tracing::instrument(skip_all)]
pub async fn notificaciones(
    State(state): State<AppState>,
    AppJson(request): AppJson<NotificationRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let email = EmailMessage::notification(&state.sender, request);

    match state.email_provider.send(&email).await {
        Ok(response) => {
            counter!("email_dispatch_total", "status" => "sent").increment(1);
            tracing::info!(
                to = %email.to,
                provider_id = response.provider_id.as_deref().unwrap_or("-"),
                "Notification email sent"
            );
            Ok(Json(StatusResponse::ok()))
        }
        Err(e) => {
            counter!("email_dispatch_total", "status" => "failed").increment(1);
            tracing::error!(to = %email.to, error = %e, "Failed to send notification email");
            Err(e.into())
        }
    }
}
