//! 优惠券数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::status::CouponStatus;
use crate::core::serde_helpers::double_option;
use crate::infrastructure::store::Record;

/// 优惠类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponKind {
    /// 按百分比折扣，取值 0 到 100
    Percentage,
    /// 固定金额折扣
    Fixed,
}

impl CouponKind {
    pub fn check_value(self, value: f64) -> Result<(), String> {
        match self {
            CouponKind::Percentage if !(0.0..=100.0).contains(&value) => {
                Err("Percentage value must be between 0 and 100".to_string())
            }
            CouponKind::Fixed if value < 0.0 => Err("Fixed value must not be negative".to_string()),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order: Option<f64>,
    /// 只对百分比优惠生效
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Coupon {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// 带派生状态的优惠券
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponView {
    #[serde(flatten)]
    pub coupon: Coupon,
    pub status: CouponStatus,
}

/// 创建优惠券请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCouponRequest {
    #[validate(length(min = 1, max = 50, message = "Code must be between 1 and 50 characters"))]
    pub code: String,
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub value: f64,
    #[validate(range(min = 0.0, message = "Minimum order must not be negative"))]
    pub min_order: Option<f64>,
    #[validate(range(min = 0.0, message = "Maximum discount must not be negative"))]
    pub max_discount: Option<f64>,
    pub expiry_date: Option<DateTime<Utc>>,
    pub usage_limit: Option<u32>,
    pub description: Option<String>,
}

impl CreateCouponRequest {
    pub fn into_coupon(self) -> Coupon {
        Coupon {
            id: Uuid::new_v4(),
            code: normalize_code(&self.code),
            kind: self.kind,
            value: self.value,
            min_order: self.min_order,
            max_discount: self.max_discount,
            expiry_date: self.expiry_date,
            usage_limit: self.usage_limit,
            used_count: 0,
            description: self.description,
        }
    }
}

/// 更新优惠券请求，只修改出现的字段
///
/// 可选字段传 `null` 表示清除，例如去掉有效期或使用次数上限。
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_amounts"))]
pub struct UpdateCouponRequest {
    #[validate(length(min = 1, max = 50, message = "Code must be between 1 and 50 characters"))]
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CouponKind>,
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub min_order: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub max_discount: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub expiry_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub usage_limit: Option<Option<u32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

fn check_amounts(request: &UpdateCouponRequest) -> Result<(), ValidationError> {
    let negative = |amount: Option<Option<f64>>| matches!(amount, Some(Some(v)) if v < 0.0);

    let message = if negative(request.min_order) {
        "Minimum order must not be negative"
    } else if negative(request.max_discount) {
        "Maximum discount must not be negative"
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new("amount");
    error.message = Some(message.into());
    Err(error)
}

impl UpdateCouponRequest {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.kind.is_none()
            && self.value.is_none()
            && self.min_order.is_none()
            && self.max_discount.is_none()
            && self.expiry_date.is_none()
            && self.usage_limit.is_none()
            && self.description.is_none()
    }

    /// 应用到副本上，调用方负责校验结果后再写回
    pub fn apply(&self, coupon: &Coupon) -> Coupon {
        let mut updated = coupon.clone();
        if let Some(code) = &self.code {
            updated.code = normalize_code(code);
        }
        if let Some(kind) = self.kind {
            updated.kind = kind;
        }
        if let Some(value) = self.value {
            updated.value = value;
        }
        if let Some(min_order) = self.min_order {
            updated.min_order = min_order;
        }
        if let Some(max_discount) = self.max_discount {
            updated.max_discount = max_discount;
        }
        if let Some(expiry_date) = self.expiry_date {
            updated.expiry_date = expiry_date;
        }
        if let Some(usage_limit) = self.usage_limit {
            updated.usage_limit = usage_limit;
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        updated
    }
}

/// 校验优惠券码请求
#[derive(Debug, Deserialize, Validate)]
pub struct ValidateCouponRequest {
    #[validate(length(min = 1, message = "Code must not be empty"))]
    pub code: String,
    #[validate(range(min = 0.0, message = "Subtotal must not be negative"))]
    pub subtotal: f64,
}

/// 优惠券码统一存为大写
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
