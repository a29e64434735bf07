//! Router configuration module.
//!
//! Registers the demo endpoints under the shared `/api` prefix and installs
//! the shared middleware stack.

use std::time::Duration;

use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::app_state::AppState;
use crate::error::ApiError;
use crate::handlers::{greeting, status};
use crate::middleware;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(title = "Git Hooks Demo API", version = "1.0.0"),
    paths(greeting::hello, status::status)
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(app_state: AppState) -> Router {
    let request_timeout = Duration::from_secs(app_state.config.request_timeout_secs);

    // Demo routes under the shared /api prefix
    let api_routes = Router::new()
        .route("/hello", get(greeting::hello))
        .route("/status", get(status::status));

    Router::new()
        .nest("/api", api_routes)
        // Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(middleware::request_logger_middleware))
                .layer(from_fn(middleware::add_security_headers))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// Fallback for requests that match no registered route.
async fn fallback() -> ApiError {
    ApiError::NotFound("The requested resource was not found".to_string())
}
