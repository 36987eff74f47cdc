use serde::Serialize;
use serde_json::Value;

/// Acknowledgment of `POST /notify`, carrying the request body verbatim.
#[derive(Debug, Serialize)]
pub struct ReceivedResponse {
    pub status: &'static str,
    pub data: Value,
}

impl ReceivedResponse {
    pub fn new(data: Value) -> Self {
        Self {
            status: "received",
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
