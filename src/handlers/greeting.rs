/// Greeting message returned by the hello endpoint.
pub const GREETING: &str = "Hello from Git Hooks Demo!";

/// Demo greeting endpoint
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "demo",
    responses(
        (status = 200, description = "Greeting message", body = String, content_type = "text/plain")
    )
)]
pub async fn hello() -> &'static str {
    GREETING
}
