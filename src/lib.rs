//! # shopfront
//!
//! 小型电商目录的后端服务：商品、优惠券、购物车、首页主视觉和订单。
//!
//! - `app`：按业务划分的模型、服务和处理器，以及商品筛选、优惠券状态等纯函数
//! - `core`：错误处理、统一响应、中间件和请求提取器
//! - `infrastructure`：日志和存储
//! - `config`：TOML 配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::product::filter::{filter_products, ProductFilter};
pub use app::coupon::status::{coupon_status, CouponStatus};
pub use app::routes::create_router;
pub use app::AppState;
