use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_LENGTH, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 1024;

/// Logs every 4xx/5xx response with its body preview, then forwards the body unchanged.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let latency_ms = start.elapsed().as_millis() as u64;
    let (mut parts, body) = response.into_parts();
    match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
        Ok(bytes) => {
            let preview = body_preview(&bytes);
            emit(status, &method, &uri, &request_id, latency_ms, &preview);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            let preview = format!("<unreadable body: {err}>");
            emit(status, &method, &uri, &request_id, latency_ms, &preview);
            Response::from_parts(parts, Body::empty())
        }
    }
}

fn body_preview(bytes: &[u8]) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

fn emit(
    status: StatusCode,
    method: &str,
    uri: &str,
    request_id: &str,
    latency_ms: u64,
    body: &str,
) {
    let status = status.as_u16();
    if status >= 500 {
        tracing::error!(status, method, uri, request_id, latency_ms, body, "request failed");
    } else {
        tracing::warn!(status, method, uri, request_id, latency_ms, body, "request rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_preview_truncates_long_payloads() {
        let long = vec![b'a'; MAX_LOGGED_BODY_BYTES + 10];
        let preview = body_preview(&long);
        assert!(preview.contains("truncated"));
        assert!(preview.contains(&format!("{} bytes total", MAX_LOGGED_BODY_BYTES + 10)));
    }

    #[test]
    fn body_preview_keeps_short_payloads() {
        assert_eq!(body_preview(b"{\"error\":\"x\"}"), "{\"error\":\"x\"}");
    }
}
