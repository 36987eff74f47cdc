use axum::Json;
use serde_json::Value;
use service_core::extract::AppJson;

use crate::models::ReceivedResponse;

#[tracing::instrument(skip_all)]
pub async fn notify(AppJson(payload): AppJson<Value>) -> Json<ReceivedResponse> {
    tracing::info!(payload = %payload, "Notification received");
    Json(ReceivedResponse::new(payload))
}
