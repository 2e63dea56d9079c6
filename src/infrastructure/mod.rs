//! 基础设施层：日志和存储

pub mod logger;
pub mod store;
