/// Status message returned by the status endpoint.
pub const STATUS: &str = "Application is running";

/// Application status endpoint
///
/// Liveness signal only. Does not probe dependencies or readiness; it only
/// confirms the process can answer HTTP requests.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "demo",
    responses(
        (status = 200, description = "Application status", body = String, content_type = "text/plain")
    )
)]
pub async fn status() -> &'static str {
    STATUS
}
