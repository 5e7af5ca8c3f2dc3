//! # Config API
//!
//! Read-only view of the effective configuration. The API key itself is
//! never returned, only whether one is configured.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use super::SharedState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    model: String,
    base_url: Option<String>,
    temperature: f32,
    top_p: f32,
    port: u16,
    api_key_configured: bool,
}

/// Get the effective configuration
#[utoipa::path(
    get,
    path = "/api/v1/config",
    tag = "config",
    responses(
        (status = 200, description = "Effective configuration", body = ConfigResponse)
    )
)]
pub async fn get_config(State(state): State<SharedState>) -> Json<ConfigResponse> {
    let config = &state.config;
    Json(ConfigResponse {
        model: config.model.model.clone(),
        base_url: config.model.base_url.clone(),
        temperature: config.model.temperature,
        top_p: config.model.top_p,
        port: config.port,
        api_key_configured: config.has_api_key(),
    })
}
