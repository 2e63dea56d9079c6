//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

use super::extractors::CUSTOMER_HEADER;

/// 请求日志中间件
///
/// 按状态码分级：5xx 记 error，4xx 记 warn，其余记 info。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let customer = req
        .headers()
        .get(CUSTOMER_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(%method, %path, %customer, status = status.as_u16(), elapsed_ms, "request failed");
    } else if status.is_client_error() {
        warn!(%method, %path, %customer, status = status.as_u16(), elapsed_ms, "request rejected");
    } else {
        info!(%method, %path, %customer, status = status.as_u16(), elapsed_ms, "request handled");
    }

    response
}
