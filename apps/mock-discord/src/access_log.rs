use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Emits one access-log line per request, shaped like a stock HTTP server's:
/// `"POST /path HTTP/1.1" 200 -`.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let line = request_line(&req);
    let res = next.run(req).await;
    tracing::info!("\"{line}\" {} -", res.status().as_u16());
    res
}

fn request_line<B>(req: &Request<B>) -> String {
    format!("{} {} {:?}", req.method(), req.uri(), req.version())
}
