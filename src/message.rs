// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub user_message: String,
    pub travel_style: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Deserialize)]
pub struct PackingRequest {
    pub city: String,
    pub temperature: f64,
    pub condition: String,
}

/// Body of a `/packing` reply. Failures ride inside an HTTP 200 with
/// `status: "error"`.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PackingResponse {
    Success { packing_tip: String },
    Error { detail: String },
}
