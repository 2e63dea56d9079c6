//! 商品筛选
//!
//! 分类页和搜索页共用的筛选规则：
//! - 分类为空、`all` 或 `new` 时不按分类过滤，否则按分类名忽略大小写匹配；
//! - 搜索词非空时，名称或描述中必须包含该词（忽略大小写）；
//! - 分类为 `new` 且没有搜索词时，只保留 `New` 标签的商品。
//!
//! 结果保持输入顺序。

use super::model::{Badge, Product};

const ALL_CATEGORY: &str = "all";
const NEW_CATEGORY: &str = "new";

/// 一次筛选的条件
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter<'a> {
    category: Option<&'a str>,
    search: Option<&'a str>,
}

impl<'a> ProductFilter<'a> {
    /// 空字符串按未提供处理
    pub fn new(category: Option<&'a str>, search: Option<&'a str>) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()),
            search: search.filter(|s| !s.is_empty()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product) && self.matches_search(product) && self.matches_badge(product)
    }

    /// 按条件过滤，保持相对顺序
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category {
            None | Some(ALL_CATEGORY) | Some(NEW_CATEGORY) => true,
            Some(category) => product.category.to_lowercase() == category.to_lowercase(),
        }
    }

    fn matches_search(&self, product: &Product) -> bool {
        let Some(term) = self.search else {
            return true;
        };
        let term = term.to_lowercase();

        product.name.to_lowercase().contains(&term)
            || product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    // 有搜索词时不限制标签
    fn matches_badge(&self, product: &Product) -> bool {
        if self.category == Some(NEW_CATEGORY) && self.search.is_none() {
            return product.badge == Some(Badge::New);
        }
        true
    }
}

/// 按分类和搜索词筛选商品
pub fn filter_products(products: &[Product], category: Option<&str>, search: Option<&str>) -> Vec<Product> {
    ProductFilter::new(category, search).apply(products)
}
