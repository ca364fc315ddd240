//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};
use simple_agent_core::Context;

// === Service Types ===

/// Response from the root endpoint.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub status: String,
    pub version: String,
}

/// Response from the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// === Agent Types ===

/// Request body for the agent endpoint.
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<Context>,
}

/// Outcome reported alongside an agent reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Success,
}

/// Response from the agent endpoint.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub response: String,
    pub status: ProcessStatus,
}

impl ProcessResponse {
    /// Wraps a successful agent reply.
    pub fn success(response: String) -> Self {
        Self { response, status: ProcessStatus::Success }
    }
}
