//! # Server Configuration
//!
//! This module contains the server setup and configuration for the
//! Mergington activities API.

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TraceContext};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/activities", get(handlers::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup_for_activity),
        )
        .route(
            "/activities/{activity_name}/unregister",
            delete(handlers::activities::unregister_from_activity),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Installs a per-request trace context so error responses carry a
/// request-scoped trace ID instead of the generated fallback.
async fn trace_context_middleware(
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let context = TraceContext {
        trace_id: format!("req-{}", &Uuid::new_v4().to_string()[..8]),
    };

    telemetry::with_trace_context(context, next.run(request)).await
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the configured bind address
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let profile = config.profile.clone();
    let state = AppState {
        config: Arc::new(config),
        db,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::activities::list_activities,
        crate::handlers::activities::signup_for_activity,
        crate::handlers::activities::unregister_from_activity,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::handlers::activities::ActivityDetail,
            crate::handlers::activities::MessageResponse,
            crate::error::ApiError,
        )
    ),
    info(
        title = "Mergington High School API",
        description = "API for viewing and signing up for extracurricular activities",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
