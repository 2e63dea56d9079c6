//! 核心层：错误处理、响应结构、中间件和提取器

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod response;
pub mod serde_helpers;
