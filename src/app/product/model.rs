//! 商品数据模型

use serde::{de, Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::core::serde_helpers::double_option;
use crate::infrastructure::store::Record;

/// 商品促销标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Badge {
    New,
    Sale,
    Trending,
    Bestseller,
}

impl Badge {
    /// `none` 和空字符串表示没有标签
    pub fn parse(value: &str) -> Result<Option<Self>, String> {
        match value {
            "" | "none" | "None" => Ok(None),
            "New" => Ok(Some(Badge::New)),
            "Sale" => Ok(Some(Badge::Sale)),
            "Trending" => Ok(Some(Badge::Trending)),
            "Bestseller" => Ok(Some(Badge::Bestseller)),
            other => Err(format!(
                "unknown badge `{}`, expected New, Sale, Trending, Bestseller or none",
                other
            )),
        }
    }
}

fn optional_badge<'de, D>(deserializer: D) -> Result<Option<Badge>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => Badge::parse(&value).map_err(de::Error::custom),
        None => Ok(None),
    }
}

fn clearable_badge<'de, D>(deserializer: D) -> Result<Option<Option<Badge>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_badge(deserializer).map(Some)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(
        default,
        deserialize_with = "optional_badge",
        skip_serializing_if = "Option::is_none"
    )]
    pub badge: Option<Badge>,
    #[serde(default, rename = "model3DUrl", skip_serializing_if = "Option::is_none")]
    pub model_3d_url: Option<String>,
}

impl Record for Product {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// 创建商品请求
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    #[validate(range(min = 0.0, message = "Original price must not be negative"))]
    pub original_price: Option<f64>,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Image must not be empty"))]
    pub image: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default, deserialize_with = "optional_badge")]
    pub badge: Option<Badge>,
    #[serde(rename = "model3DUrl")]
    pub model_3d_url: Option<String>,
}

impl CreateProductRequest {
    pub fn into_product(self) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price: self.price,
            original_price: self.original_price,
            description: self.description,
            image: self.image,
            colors: self.colors,
            badge: self.badge,
            model_3d_url: self.model_3d_url,
        }
    }
}

/// 更新商品请求，只修改出现的字段
///
/// 可选字段传 `null` 表示清除。
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "check_original_price"))]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub original_price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[validate(length(min = 1, message = "Image must not be empty"))]
    pub image: Option<String>,
    pub colors: Option<Vec<String>>,
    #[serde(default, deserialize_with = "clearable_badge")]
    pub badge: Option<Option<Badge>>,
    #[serde(default, rename = "model3DUrl", deserialize_with = "double_option")]
    pub model_3d_url: Option<Option<String>>,
}

fn check_original_price(request: &UpdateProductRequest) -> Result<(), ValidationError> {
    match request.original_price {
        Some(Some(price)) if price < 0.0 => {
            let mut error = ValidationError::new("original_price");
            error.message = Some("Original price must not be negative".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.original_price.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.colors.is_none()
            && self.badge.is_none()
            && self.model_3d_url.is_none()
    }

    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            product.category = category.trim().to_string();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(colors) = self.colors {
            product.colors = colors;
        }
        if let Some(badge) = self.badge {
            product.badge = badge;
        }
        if let Some(model_3d_url) = self.model_3d_url {
            product.model_3d_url = model_3d_url;
        }
    }
}

/// 商品列表查询参数
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}
