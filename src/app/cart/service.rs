//! 购物车业务服务

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use super::model::{AddCartItemRequest, Cart, UpdateCartItemRequest};
use crate::core::error::CoreError;
use crate::infrastructure::store::Store;

#[derive(Clone)]
pub struct CartService {
    store: Arc<Store>,
}

impl CartService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// 获取顾客购物车，第一次访问时创建空车
    pub fn get_cart(&self, customer_id: Uuid) -> Result<Cart, CoreError> {
        self.with_cart(customer_id, |_| Ok(()))
    }

    pub fn add_item(&self, customer_id: Uuid, request: AddCartItemRequest) -> Result<Cart, CoreError> {
        request.validate()?;

        let product = self
            .store
            .products
            .get(request.product_id)?
            .ok_or_else(|| {
                CoreError::NotFound(format!("Product with id {} not found", request.product_id))
            })?;

        let cart = self.with_cart(customer_id, |cart| cart.add_item(&product, &request))?;
        debug!("Customer {} added {} x{}", customer_id, product.name, request.quantity);
        Ok(cart)
    }

    pub fn update_item(
        &self,
        customer_id: Uuid,
        item_id: Uuid,
        request: UpdateCartItemRequest,
    ) -> Result<Cart, CoreError> {
        request.validate()?;

        self.with_cart(customer_id, |cart| {
            if cart.set_quantity(item_id, request.quantity) {
                Ok(())
            } else {
                Err(CoreError::NotFound("Item not found in cart".to_string()))
            }
        })
    }

    pub fn remove_item(&self, customer_id: Uuid, item_id: Uuid) -> Result<Cart, CoreError> {
        self.with_cart(customer_id, |cart| {
            cart.remove_item(item_id);
            Ok(())
        })
    }

    pub fn clear(&self, customer_id: Uuid) -> Result<(), CoreError> {
        self.with_cart(customer_id, |cart| {
            cart.clear();
            Ok(())
        })?;
        Ok(())
    }

    /// 在写锁内取出或创建购物车并修改，失败时不写回
    fn with_cart(
        &self,
        customer_id: Uuid,
        f: impl FnOnce(&mut Cart) -> Result<(), CoreError>,
    ) -> Result<Cart, CoreError> {
        self.store.carts.write(|carts| {
            let index = match carts.iter().position(|c| c.customer_id == customer_id) {
                Some(index) => index,
                None => {
                    carts.push(Cart::new(customer_id));
                    carts.len() - 1
                }
            };

            let mut cart = carts[index].clone();
            f(&mut cart)?;
            carts[index] = cart.clone();
            Ok(cart)
        })?
    }
}
