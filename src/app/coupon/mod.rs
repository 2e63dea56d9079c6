//! 优惠券

pub mod handler;
pub mod model;
pub mod redemption;
pub mod service;
pub mod status;
