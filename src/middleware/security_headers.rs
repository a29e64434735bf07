use axum::{
    body::Body,
    http::{header, Request, Response},
    middleware::Next,
};

/// Add security headers to all responses
///
/// Headers added:
/// - X-Content-Type-Options: nosniff (prevent MIME sniffing)
/// - X-Frame-Options: DENY (prevent clickjacking)
/// - Referrer-Policy: Control referrer information
/// - X-API-Version: API version for incident response
pub async fn add_security_headers(request: Request<Body>, next: Next) -> Response<Body> {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();

    // Prevent MIME type sniffing
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        "nosniff"
            .parse()
            .expect("Failed to parse nosniff header value"),
    );

    // Prevent clickjacking
    headers.insert(
        header::X_FRAME_OPTIONS,
        "DENY".parse().expect("Failed to parse DENY header value"),
    );

    // Control referrer information sent to external sites
    headers.insert(
        header::HeaderName::from_static("referrer-policy"),
        "strict-origin-when-cross-origin"
            .parse()
            .expect("Failed to parse referrer policy header value"),
    );

    // Remove server identification (if present)
    headers.remove(header::SERVER);

    // API version header (helps with incident response)
    headers.insert(
        header::HeaderName::from_static("x-api-version"),
        "1.0".parse().expect("Failed to parse API version header value"),
    );

    response
}
