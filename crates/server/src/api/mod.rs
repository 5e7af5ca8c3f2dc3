//! # HTTP API
//!
//! JSON routes under `/api/v1` plus the embedded frontend fallback.

pub mod config;
pub mod session;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use painpoint_core::config::AppConfig;
use painpoint_core::IdeaStudio;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::assets;

/// Application state
pub struct AppState {
    pub studio: IdeaStudio,
    pub config: AppConfig,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            studio: IdeaStudio::new(config.generator()),
            config,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                success: false,
                message: message.into(),
            }),
        )
    }
}

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Painpoint API",
        version = "1.0.0",
        description = "Pick pain points and generate business ideas with Gemini"
    ),
    paths(
        session::get_catalog,
        session::get_session,
        session::toggle_selection,
        session::clear_selection,
        session::generate_ideas,
        config::get_config,
    ),
    components(schemas(
        ApiResponse,
        session::PainPointResponse,
        session::CategoryResponse,
        session::CatalogResponse,
        session::IdeaResponse,
        session::SessionResponse,
        session::ToggleRequest,
        config::ConfigResponse,
    )),
    tags(
        (name = "catalog", description = "Static pain point catalog"),
        (name = "session", description = "Selection and idea generation"),
        (name = "config", description = "Effective configuration")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    match ApiDoc::openapi().to_json() {
        Ok(doc) => ([(header::CONTENT_TYPE, "application/json")], doc).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render OpenAPI document");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Build the full application router
pub fn router(state: SharedState) -> Router {
    let catalog_routes = Router::new().route("/", get(session::get_catalog));

    let session_routes = Router::new()
        .route("/", get(session::get_session))
        .route("/selection", delete(session::clear_selection))
        .route("/selection/toggle", post(session::toggle_selection))
        .route("/generate", post(session::generate_ideas));

    Router::new()
        .nest("/api/v1/catalog", catalog_routes)
        .nest("/api/v1/session", session_routes)
        .route("/api/v1/config", get(config::get_config))
        .route("/api/v1/openapi.json", get(serve_openapi))
        .fallback(get(assets::serve_static))
        .with_state(state)
}
