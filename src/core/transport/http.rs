//! HTTP transport implementation.
//!
//! JSON API over HTTP for the prompt catalog and the brief generator.
//! Every route is mounted under the configured prefix.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, instrument};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::{CatalogServer, Error, Result};
use crate::domains::generator::BriefRequest;
use crate::domains::prompts::{PromptDraft, PromptQuery};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: CatalogServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", self.config.description(), cors_status);
        info!("  → Prompts:  {}", self.config.route_path("/prompts"));
        info!("  → Generate: POST {}", self.config.route_path("/generate"));
        info!("  → Health:   GET {}", self.config.route_path("/health"));

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the application router.
pub fn build_router(server: CatalogServer, config: &HttpConfig) -> Router {
    let api = Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route("/prompts/{id}", get(get_prompt).delete(delete_prompt))
        .route("/prompts/{id}/upvote", post(upvote_prompt))
        .route("/generate", post(generate_prompt).options(preflight))
        .route("/health", get(health_check));

    let mut app = match config.mount_point() {
        Some(prefix) => Router::new().nest(&prefix, api),
        None => api,
    }
    .route("/", get(root_handler))
    .with_state(server);

    if config.enable_cors {
        app = app.layer(cors_layer());
    }

    app.layer(TraceLayer::new_for_http())
}

/// Any origin, with credentials.
///
/// A literal `*` cannot be combined with credentials, so the request's own
/// origin, method and headers are echoed back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Unwrap a JSON body, turning extractor rejections into 400 responses.
fn json_body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| Error::invalid_body(rejection.body_text()))
}

/// Unwrap query parameters, turning extractor rejections into 400 responses.
fn query_params<T>(query: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| Error::invalid_body(rejection.body_text()))
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<CatalogServer>) -> impl IntoResponse {
    let http = &server.config().transport;
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "endpoints": {
            "prompts": http.route_path("/prompts"),
            "generate": http.route_path("/generate"),
            "health": http.route_path("/health"),
        },
        "template": server.generator().template().name,
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "PromptCart API is running"
    }))
}

/// List prompts, most upvoted first.
#[instrument(skip_all)]
async fn list_prompts(
    State(server): State<CatalogServer>,
    query: std::result::Result<Query<PromptQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let query = query_params(query)?;
    debug!(?query, "Listing prompts");
    let prompts = server.prompts().list_prompts(&query).await?;
    debug!("Listing {} prompt(s)", prompts.len());
    Ok(Json(prompts))
}

/// Fetch one prompt.
#[instrument(skip(server))]
async fn get_prompt(
    State(server): State<CatalogServer>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let prompt = server.prompts().get_prompt(&id).await?;
    Ok(Json(prompt))
}

/// Create a prompt.
#[instrument(skip_all)]
async fn create_prompt(
    State(server): State<CatalogServer>,
    payload: std::result::Result<Json<PromptDraft>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let draft = json_body(payload)?;
    let prompt = server.prompts().create_prompt(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Prompt created successfully",
            "prompt": prompt
        })),
    ))
}

/// Add one upvote.
#[instrument(skip(server))]
async fn upvote_prompt(
    State(server): State<CatalogServer>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let upvotes = server.prompts().upvote_prompt(&id).await?;
    Ok(Json(json!({
        "message": "Prompt upvoted successfully",
        "upvotes": upvotes
    })))
}

/// Delete a prompt.
#[instrument(skip(server))]
async fn delete_prompt(
    State(server): State<CatalogServer>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    server.prompts().delete_prompt(&id).await?;
    Ok(Json(json!({ "message": "Prompt deleted successfully" })))
}

/// Build a brief for an external language model.
#[instrument(skip_all)]
async fn generate_prompt(
    State(server): State<CatalogServer>,
    payload: std::result::Result<Json<BriefRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let request = json_body(payload)?;
    let prompt = server.generator().generate(&request)?;
    Ok(Json(json!({ "prompt": prompt })))
}

/// Bare `OPTIONS /generate`: 200 with no body.
async fn preflight() -> StatusCode {
    StatusCode::OK
}
