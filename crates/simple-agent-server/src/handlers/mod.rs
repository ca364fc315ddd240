//! HTTP route handlers for the agent server.

pub mod agent;

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::{HealthResponse, ServiceInfo};
use crate::ServerState;

/// Service descriptor endpoint.
pub async fn root(State(state): State<Arc<ServerState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.config.service.name.clone(),
        status: state.config.service.status.clone(),
        version: state.config.service.version.clone(),
    })
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
