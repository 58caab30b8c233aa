use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Method gate applied to every path before any handler runs.
///
/// `OPTIONS` is answered with an empty 200 (pre-flight), anything other than
/// `POST` gets 405, even on unknown paths.
pub async fn method_guard(req: Request, next: Next) -> Response {
    match *req.method() {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => next.run(req).await,
        _ => {
            tracing::debug!(method = %req.method(), path = %req.uri().path(), "Method not allowed");
            (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
        }
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
