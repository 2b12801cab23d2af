use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every request as a structured `http_request` event.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        "http_request"
    );

    response
}
