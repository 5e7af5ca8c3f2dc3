//! # Session API
//!
//! Catalog browsing, selection toggling and idea generation.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use painpoint_core::{BusinessIdea, CategoryGroup, PainPoint, SessionError, SessionSnapshot};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{ApiResponse, SharedState};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiResponse>)>;

// === API Types ===

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Case-insensitive match on name or description
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PainPointResponse {
    name: String,
    description: String,
    category: String,
    emoji: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    category: String,
    points: Vec<PainPointResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    search: String,
    categories: Vec<CategoryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct IdeaResponse {
    name: String,
    concept: String,
    #[serde(rename = "targetAudience")]
    target_audience: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Selected pain point names in pick order
    selected: Vec<String>,
    /// idle, loading, success or error
    status: String,
    /// Whether the generate button should be enabled
    can_generate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    ideas: Option<Vec<IdeaResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_kind: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ToggleRequest {
    name: String,
}

impl From<PainPoint> for PainPointResponse {
    fn from(p: PainPoint) -> Self {
        Self {
            name: p.name,
            description: p.description,
            category: p.category,
            emoji: p.emoji,
        }
    }
}

impl From<CategoryGroup> for CategoryResponse {
    fn from(group: CategoryGroup) -> Self {
        Self {
            category: group.category,
            points: group.points.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<BusinessIdea> for IdeaResponse {
    fn from(idea: BusinessIdea) -> Self {
        Self {
            name: idea.name,
            concept: idea.concept,
            target_audience: idea.target_audience,
        }
    }
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(s: SessionSnapshot) -> Self {
        Self {
            selected: s.selected,
            status: s.status.to_string(),
            can_generate: s.can_generate,
            ideas: s.ideas.map(|ideas| ideas.into_iter().map(Into::into).collect()),
            error: s.error,
            error_kind: s.error_kind.map(|kind| kind.as_str().to_string()),
        }
    }
}

fn session_error(e: SessionError) -> (StatusCode, Json<ApiResponse>) {
    let status = match e {
        SessionError::UnknownPainPoint(_) => StatusCode::NOT_FOUND,
        SessionError::GenerationInFlight => StatusCode::CONFLICT,
        // `IdeaStudio::generate` reports this in the snapshot instead
        SessionError::EmptySelection => StatusCode::BAD_REQUEST,
    };
    ApiResponse::failure(status, e.to_string())
}

// === Handlers ===

/// List the catalog grouped by category, optionally filtered
#[utoipa::path(
    get,
    path = "/api/v1/catalog",
    tag = "catalog",
    params(CatalogQuery),
    responses(
        (status = 200, description = "Matching categories in catalog order", body = CatalogResponse)
    )
)]
pub async fn get_catalog(
    State(state): State<SharedState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let categories = state
        .studio
        .search(&query.search)
        .into_iter()
        .map(Into::into)
        .collect();

    Json(CatalogResponse {
        search: query.search,
        categories,
    })
}

/// Current selection and generation state
#[utoipa::path(
    get,
    path = "/api/v1/session",
    tag = "session",
    responses(
        (status = 200, description = "Session snapshot", body = SessionResponse)
    )
)]
pub async fn get_session(State(state): State<SharedState>) -> Json<SessionResponse> {
    Json(state.studio.snapshot().into())
}

/// Toggle a pain point in the selection
#[utoipa::path(
    post,
    path = "/api/v1/session/selection/toggle",
    tag = "session",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Updated session", body = SessionResponse),
        (status = 404, description = "Unknown pain point", body = ApiResponse)
    )
)]
pub async fn toggle_selection(
    State(state): State<SharedState>,
    Json(req): Json<ToggleRequest>,
) -> ApiResult<SessionResponse> {
    state
        .studio
        .toggle(&req.name)
        .map(|snapshot| Json(snapshot.into()))
        .map_err(session_error)
}

/// Clear the selection
#[utoipa::path(
    delete,
    path = "/api/v1/session/selection",
    tag = "session",
    responses(
        (status = 200, description = "Updated session", body = SessionResponse)
    )
)]
pub async fn clear_selection(State(state): State<SharedState>) -> Json<SessionResponse> {
    Json(state.studio.clear_selection().into())
}

/// Generate business ideas for the current selection
///
/// Waits for the model to answer. Empty selections and generation failures
/// are reported in the returned session with `status = "error"`.
#[utoipa::path(
    post,
    path = "/api/v1/session/generate",
    tag = "session",
    responses(
        (status = 200, description = "Session after the generation attempt", body = SessionResponse),
        (status = 409, description = "A generation is already in flight", body = ApiResponse)
    )
)]
pub async fn generate_ideas(State(state): State<SharedState>) -> ApiResult<SessionResponse> {
    let snapshot = state.studio.generate().await.map_err(|e| {
        tracing::warn!(error = %e, "Rejected generation request");
        session_error(e)
    })?;
    Ok(Json(snapshot.into()))
}

#[cfg(test)]
mod tests {
    use crate::api::tests::{app, app_with, send};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use painpoint_core::skills::{BackendError, GenerationRequest, TextBackend};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Backend that holds its reply until released
    #[derive(Default)]
    struct GatedBackend {
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl TextBackend for GatedBackend {
        async fn generate_text(&self, _request: &GenerationRequest) -> Result<String, BackendError> {
            self.started.notify_one();
            self.release.notified().await;
            Ok(FIVE_IDEAS.to_string())
        }
    }

    const FIVE_IDEAS: &str = r#"[
        {"name":"Nudge","concept":"Daily micro-deadlines.","targetAudience":"Students"},
        {"name":"Streaky","concept":"Habit streaks with friends.","targetAudience":"Remote workers"},
        {"name":"StartNow","concept":"Two-minute task starter.","targetAudience":"Freelancers"},
        {"name":"BodyDouble","concept":"Live co-working rooms.","targetAudience":"ADHD adults"},
        {"name":"DueBuddy","concept":"Accountability partner matching.","targetAudience":"Writers"}
    ]"#;

    #[tokio::test]
    async fn test_catalog_full_and_filtered() {
        let app = app("[]");

        let (status, full) = send(&app, "GET", "/api/v1/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(full["categories"][0]["category"], "Productivity & Focus");
        assert_eq!(full["categories"][0]["points"][0]["name"], "Procrastination");

        let (_, filtered) = send(&app, "GET", "/api/v1/catalog?search=SLEEP", None).await;
        let categories = filtered["categories"].as_array().unwrap();
        assert!(!categories.is_empty());
        assert!(categories.len() < full["categories"].as_array().unwrap().len());

        let (_, none) = send(&app, "GET", "/api/v1/catalog?search=qqqqq", None).await;
        assert_eq!(none["categories"], json!([]));
    }

    #[tokio::test]
    async fn test_generate_returns_cards() {
        let app = app(FIVE_IDEAS);
        let (status, session) = send(
            &app,
            "POST",
            "/api/v1/session/selection/toggle",
            Some(json!({ "name": "Procrastination" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["selected"], json!(["Procrastination"]));
        assert_eq!(session["can_generate"], true);

        let (status, session) = send(&app, "POST", "/api/v1/session/generate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["status"], "success");
        assert_eq!(session["ideas"].as_array().unwrap().len(), 5);
        assert_eq!(session["ideas"][3]["targetAudience"], "ADHD adults");
    }

    #[tokio::test]
    async fn test_generate_empty_reply() {
        let app = app("");
        send(
            &app,
            "POST",
            "/api/v1/session/selection/toggle",
            Some(json!({ "name": "Procrastination" })),
        )
        .await;

        let (status, session) = send(&app, "POST", "/api/v1/session/generate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["status"], "error");
        assert_eq!(session["error_kind"], "empty_response");
        assert_eq!(session["error"], "Received an empty response from the API.");
        assert!(session.get("ideas").is_none());
    }

    #[tokio::test]
    async fn test_generate_malformed_reply() {
        let app = app("{not json");
        send(
            &app,
            "POST",
            "/api/v1/session/selection/toggle",
            Some(json!({ "name": "Procrastination" })),
        )
        .await;

        let (_, session) = send(&app, "POST", "/api/v1/session/generate", None).await;
        assert_eq!(session["error_kind"], "malformed_response");
    }

    #[tokio::test]
    async fn test_generate_without_selection() {
        let app = app(FIVE_IDEAS);
        let (status, session) = send(&app, "POST", "/api/v1/session/generate", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["error_kind"], "user_input");
        assert_eq!(
            session["error"],
            "Please select at least one pain point to generate ideas."
        );
    }

    #[tokio::test]
    async fn test_generate_while_loading_conflicts() {
        let backend = Arc::new(GatedBackend::default());
        let app = app_with(backend.clone());
        send(
            &app,
            "POST",
            "/api/v1/session/selection/toggle",
            Some(json!({ "name": "Procrastination" })),
        )
        .await;

        let first = {
            let app = app.clone();
            tokio::spawn(async move { send(&app, "POST", "/api/v1/session/generate", None).await })
        };
        backend.started.notified().await;

        let (status, session) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["status"], "loading");
        assert_eq!(session["can_generate"], false);

        let (status, body) = send(&app, "POST", "/api/v1/session/generate", None).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        backend.release.notify_one();
        let (status, session) = first.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["status"], "success");
        assert_eq!(session["ideas"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_toggle_unknown_and_clear() {
        let app = app("[]");
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/session/selection/toggle",
            Some(json!({ "name": "Not Real" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        send(
            &app,
            "POST",
            "/api/v1/session/selection/toggle",
            Some(json!({ "name": "Burnout" })),
        )
        .await;
        let (status, session) = send(&app, "DELETE", "/api/v1/session/selection", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(session["selected"], json!([]));

        let (_, session) = send(&app, "GET", "/api/v1/session", None).await;
        assert_eq!(session["status"], "idle");
    }
}
