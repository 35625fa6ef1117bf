use axum::{middleware::Next, response::Response};

pub async fn log_requests(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = std::time::Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        %path,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
