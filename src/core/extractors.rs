//! 请求提取器

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::error::CoreError;

/// 标识当前顾客的请求头
pub const CUSTOMER_HEADER: &str = "x-customer-id";

/// 当前顾客 ID，取自 `X-Customer-Id` 请求头
///
/// 只做身份标识，不做认证。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CustomerId
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(CUSTOMER_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| CoreError::Unauthorized("Missing X-Customer-Id header".to_string()))?;

        Uuid::parse_str(value.trim())
            .map(CustomerId)
            .map_err(|_| CoreError::Unauthorized("Invalid X-Customer-Id header".to_string()))
    }
}
