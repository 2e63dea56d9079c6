//! 购物车数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::app::product::model::Product;
use crate::core::error::CoreError;
use crate::infrastructure::store::Record;

/// 单行商品数量上限
pub const MAX_QUANTITY: u32 = 999;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub selected_size: String,
    pub selected_color: String,
    pub quantity: u32,
}

impl CartItem {
    /// 下单时的商品快照
    pub fn from_product(product: &Product, request: &AddCartItemRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            selected_size: request.selected_size.clone(),
            selected_color: request.selected_color.clone(),
            quantity: request.quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    fn same_variant(&self, request: &AddCartItemRequest) -> bool {
        self.product_id == request.product_id
            && self.selected_size == request.selected_size
            && self.selected_color == request.selected_color
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub items: Vec<CartItem>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Cart {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Cart {
    pub fn new(customer_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_id,
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// 同一商品、尺码、颜色合并为一行，数量累加
    ///
    /// 累加后超过 [`MAX_QUANTITY`] 时拒绝，购物车保持不变。
    pub fn add_item(&mut self, product: &Product, request: &AddCartItemRequest) -> Result<(), CoreError> {
        match self.items.iter_mut().find(|item| item.same_variant(request)) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(request.quantity)
                    .filter(|quantity| *quantity <= MAX_QUANTITY)
                    .ok_or_else(|| {
                        CoreError::BadRequest(format!(
                            "Quantity must not exceed {} per item",
                            MAX_QUANTITY
                        ))
                    })?;
            }
            None => self.items.push(CartItem::from_product(product, request)),
        }
        self.touch();
        Ok(())
    }

    /// 修改数量，行不存在时返回 `false`
    pub fn set_quantity(&mut self, item_id: Uuid, quantity: u32) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == item_id) else {
            return false;
        };
        item.quantity = quantity;
        self.touch();
        true
    }

    pub fn remove_item(&mut self, item_id: Uuid) {
        self.items.retain(|item| item.id != item_id);
        self.touch();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// 加入购物车请求
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    #[validate(length(min = 1, message = "Size must not be empty"))]
    pub selected_size: String,
    #[validate(length(min = 1, message = "Color must not be empty"))]
    pub selected_color: String,
    #[validate(range(min = 1, max = 999, message = "Quantity must be between 1 and 999"))]
    pub quantity: u32,
}

/// 修改数量请求
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCartItemRequest {
    #[validate(range(min = 1, max = 999, message = "Quantity must be between 1 and 999"))]
    pub quantity: u32,
}
