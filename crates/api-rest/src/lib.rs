//! # API REST
//!
//! REST API implementation for Curie.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Decision logic lives in `curie-core`; handlers only map its results onto HTTP.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ApiInfoRes, HealthRes, HealthService, ListTrialsRes};
use curie_core::{
    CdsError, EvidenceConfidence, EvidenceLevel, GuidelineData, GuidelineMetadata,
    ModifierVector, PathwayRequest, PathwayResult, PathwayService, RecommendationClass,
    TherapyStep, TrialRecord,
};

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    pathway_service: Arc<PathwayService>,
}

impl AppState {
    pub fn new(pathway_service: PathwayService) -> Self {
        Self {
            pathway_service: Arc::new(pathway_service),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Curie CDS API", version = "1.0.0"),
    paths(
        root,
        health,
        guideline_metadata,
        create_pathway,
        list_trials,
        get_guidelines,
    ),
    components(schemas(
        HealthRes,
        ApiInfoRes,
        ListTrialsRes,
        GuidelineMetadata,
        PathwayRequest,
        PathwayResult,
        ModifierVector,
        TherapyStep,
        TrialRecord,
        RecommendationClass,
        EvidenceLevel,
        EvidenceConfidence,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with CORS and Swagger UI.
///
/// CORS allows any origin with GET, POST and OPTIONS and does not allow credentials.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/guidelines/metadata", get(guideline_metadata))
        .route("/api/pathway", post(create_pathway))
        .route("/api/trials", get(list_trials))
        .route("/api/guidelines", get(get_guidelines))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

/// Maps a core error onto a status code and a short client-facing message.
fn error_response(err: &CdsError) -> (StatusCode, &'static str) {
    match err {
        CdsError::UnsupportedDisease(_) => {
            (StatusCode::BAD_REQUEST, "Only HFpEF is supported in v1")
        }
        CdsError::ValidationFailed(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Pathway generation failed validation",
        ),
        CdsError::InvalidInput(_) | CdsError::FileRead(_) | CdsError::Deserialization(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service identification", body = ApiInfoRes)
    )
)]
#[axum::debug_handler]
async fn root() -> Json<ApiInfoRes> {
    Json(HealthService::api_info())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/guidelines/metadata",
    responses(
        (status = 200, description = "Guideline version and metadata", body = GuidelineMetadata)
    )
)]
#[axum::debug_handler]
async fn guideline_metadata(State(state): State<AppState>) -> Json<GuidelineMetadata> {
    Json(state.pathway_service.metadata())
}

#[utoipa::path(
    post,
    path = "/api/pathway",
    request_body = PathwayRequest,
    responses(
        (status = 200, description = "Generated management pathway", body = PathwayResult),
        (status = 400, description = "Unsupported disease"),
        (status = 422, description = "Malformed request body"),
        (status = 500, description = "Pathway failed validation or reference data unavailable")
    )
)]
/// Generate an HFpEF management pathway
///
/// This is the primary endpoint: deterministic and template-based. The disease selector must be
/// `HFpEF`; modifiers that are omitted default to `false`.
///
/// # Returns
/// * `Ok(Json<PathwayResult>)` - Annotated therapy steps with supporting evidence
/// * `Err((StatusCode, &str))` - Client or server error
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the disease selector is not `HFpEF`.
///
/// Returns `500 Internal Server Error` if:
/// - the generated pathway has no steps or no supporting trials,
/// - reference data cannot be read or parsed.
#[axum::debug_handler]
async fn create_pathway(
    State(state): State<AppState>,
    Json(req): Json<PathwayRequest>,
) -> Result<Json<PathwayResult>, (StatusCode, &'static str)> {
    match state.pathway_service.pathway(&req) {
        Ok(pathway) => Ok(Json(pathway)),
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!("Rejected pathway request: {}", e);
            } else {
                tracing::error!("Generate pathway error: {:?}", e);
            }
            Err(error_response(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/trials",
    responses(
        (status = 200, description = "All trial records", body = ListTrialsRes),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn list_trials(
    State(state): State<AppState>,
) -> Result<Json<ListTrialsRes>, (StatusCode, &'static str)> {
    match state.pathway_service.trials() {
        Ok(trials) => Ok(Json(ListTrialsRes { trials })),
        Err(e) => {
            tracing::error!("List trials error: {:?}", e);
            Err(error_response(&e))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/guidelines",
    responses(
        (status = 200, description = "Full guideline document"),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn get_guidelines(
    State(state): State<AppState>,
) -> Result<Json<GuidelineData>, (StatusCode, &'static str)> {
    match state.pathway_service.guidelines() {
        Ok(guidelines) => Ok(Json(guidelines)),
        Err(e) => {
            tracing::error!("Load guidelines error: {:?}", e);
            Err(error_response(&e))
        }
    }
}
