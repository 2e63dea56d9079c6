//! 商品业务服务

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::filter::ProductFilter;
use super::model::{CreateProductRequest, Product, ProductQuery, UpdateProductRequest};
use crate::core::error::CoreError;
use crate::infrastructure::store::Store;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<Store>,
}

impl ProductService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CoreError> {
        let filter = ProductFilter::new(query.category.as_deref(), query.search.as_deref());
        Ok(self.store.products.read(|products| filter.apply(products))?)
    }

    pub fn get_product(&self, id: Uuid) -> Result<Product, CoreError> {
        self.store
            .products
            .get(id)?
            .ok_or_else(|| not_found(id))
    }

    pub fn create_product(&self, request: CreateProductRequest) -> Result<Product, CoreError> {
        request.validate()?;

        let product = self.store.products.insert(request.into_product())?;
        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub fn update_product(&self, id: Uuid, request: UpdateProductRequest) -> Result<Product, CoreError> {
        request.validate()?;
        if request.is_empty() {
            return Err(CoreError::BadRequest("No update data provided".to_string()));
        }

        let product = self
            .store
            .products
            .update(id, |product| request.apply(product))?
            .ok_or_else(|| not_found(id))?;
        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub fn delete_product(&self, id: Uuid) -> Result<(), CoreError> {
        if !self.store.products.remove(id)? {
            return Err(not_found(id));
        }
        info!("Deleted product: {}", id);
        Ok(())
    }
}

fn not_found(id: Uuid) -> CoreError {
    CoreError::NotFound(format!("Product with id {} not found", id))
}
