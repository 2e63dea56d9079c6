//! 订单和支付

pub mod handler;
pub mod model;
pub mod payment;
pub mod pricing;
pub mod service;
