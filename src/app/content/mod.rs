//! 站点内容（首页主视觉）

pub mod handler;
pub mod model;
pub mod service;
