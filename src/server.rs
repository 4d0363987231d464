//! HTTP surface: `/analyze`, `/health`, `/suggest` and optional static files

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::autocomplete::suggest;
use crate::catalog::Catalog;
use crate::manifest::{upstream_message, MANIFEST};
use crate::parse::AnalysisResult;
use crate::pipeline::{analyze_validated, AiBackend, PipelineError};
use crate::validation::validate_json;

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    backend: Arc<dyn AiBackend>,
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(backend: Arc<dyn AiBackend>, catalog: Catalog) -> Self {
        Self {
            backend,
            catalog: Arc::new(catalog),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(rename = "productName", default)]
    product_name: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct AnalyzeResponse {
    success: bool,
    data: AnalysisResult,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Debug, Deserialize)]
struct SuggestQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize)]
struct SuggestResponse {
    suggestions: Vec<String>,
}

/// Error-to-status mapping at the request boundary
struct ApiError(PipelineError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            PipelineError::Invalid(e) => {
                tracing::warn!(event = "analyze.rejected", kind = e.kind(), "invalid product name");
                let body = ErrorResponse {
                    error: e.message().to_string(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            PipelineError::Upstream(detail) => {
                tracing::error!(event = "analyze.upstream_failed", error = %detail, "generative call failed");
                let body = ErrorResponse {
                    error: upstream_message().to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/api/analyze", post(analyze))
        .route("/suggest", get(suggest_products))
        .with_state(state);

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(cors).layer(middleware::from_fn(log_http_request))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: &MANIFEST.messages.health,
    })
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    // An unreadable body carries no product name
    let product_name = payload.ok().and_then(|Json(req)| req.product_name);
    let name = validate_json(product_name.as_ref()).map_err(|e| ApiError(e.into()))?;

    tracing::info!(event = "analyze.start", product = %name);
    let data = analyze_validated(state.backend.as_ref(), &name)
        .await
        .map_err(ApiError)?;
    let missing = data.missing_sections();
    if !missing.is_empty() {
        tracing::debug!(event = "analyze.partial", missing = ?missing, "sections absent from reply");
    }

    Ok(Json(AnalyzeResponse {
        success: true,
        data,
    }))
}

async fn suggest_products(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> Json<SuggestResponse> {
    Json(SuggestResponse {
        suggestions: suggest(&state.catalog, &query.q),
    })
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;
    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        "http request"
    );
    response
}
