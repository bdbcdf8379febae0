// --- File: crates/slotbridge_common/src/middleware.rs ---
use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{error, info, info_span, Instrument};

/// Largest error body that is copied into the log.
const MAX_LOGGED_BODY_BYTES: usize = 64 * 1024;

/// Logs every request and its response status.
///
/// A 500 response additionally gets its body logged at ERROR; the body is
/// buffered and handed back unchanged.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %uuid::Uuid::new_v4(),
    );

    async move {
        info!("Request {} {} received", method, path);

        let response = next.run(request).await;
        let status = response.status();

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            info!("Response {} returned", status.as_u16());
            return response;
        }

        let (parts, body) = response.into_parts();
        match to_bytes(body, MAX_LOGGED_BODY_BYTES).await {
            Ok(bytes) => {
                error!(
                    "Response {} returned. Error: {}",
                    status.as_u16(),
                    String::from_utf8_lossy(&bytes)
                );
                Response::from_parts(parts, Body::from(bytes))
            }
            Err(e) => {
                error!(
                    "Response {} returned. Error body unreadable: {}",
                    status.as_u16(),
                    e
                );
                Response::from_parts(parts, Body::empty())
            }
        }
    }
    .instrument(span)
    .await
}
