//! 核心响应处理模块

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

/// 响应头里回传的请求编号
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 成功响应的统一外壳
///
/// 请求编号同时写入响应体和 `x-request-id` 响应头，便于和日志对照。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub request_id: String,
    pub timestamp: String,
    #[serde(skip)]
    status: StatusCode,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self::with_status(StatusCode::OK, data)
    }

    /// 新建资源，返回 201
    pub fn created(data: T) -> Self {
        Self::with_status(StatusCode::CREATED, data)
    }

    fn with_status(status: StatusCode, data: T) -> Self {
        Self {
            success: true,
            data,
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        let request_id = HeaderValue::from_str(&self.request_id).ok();

        let mut response = (status, Json(self)).into_response();
        if let Some(value) = request_id {
            response.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        response
    }
}
