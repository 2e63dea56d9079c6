//! 存储基础设施
//!
//! 每个聚合一个集合，集合内按插入顺序保存记录，由 `RwLock` 保护。
//! 可选的 JSON 快照用于在进程重启之间保留数据。

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::app::cart::model::Cart;
use crate::app::content::model::HeroContent;
use crate::app::coupon::model::Coupon;
use crate::app::order::model::Order;
use crate::app::product::model::Product;

/// 存储错误类型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("collection lock poisoned: {0}")]
    Poisoned(&'static str),
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// 可以存入集合的记录
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync {
    fn id(&self) -> Uuid;
}

/// 按插入顺序保存的记录集合
pub struct Collection<T> {
    name: &'static str,
    items: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    pub fn new(name: &'static str, items: Vec<T>) -> Self {
        Self {
            name,
            items: RwLock::new(items),
        }
    }

    /// 在读锁下执行闭包
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> Result<R, StoreError> {
        let items = self.items.read().map_err(|_| StoreError::Poisoned(self.name))?;
        Ok(f(&items))
    }

    /// 在写锁下执行闭包，检查和修改在同一把锁内完成
    pub fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R, StoreError> {
        let mut items = self.items.write().map_err(|_| StoreError::Poisoned(self.name))?;
        Ok(f(&mut items))
    }

    pub fn list(&self) -> Result<Vec<T>, StoreError> {
        self.read(|items| items.to_vec())
    }

    pub fn get(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        self.read(|items| items.iter().find(|item| item.id() == id).cloned())
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Result<Option<T>, StoreError> {
        self.read(|items| items.iter().find(|item| pred(*item)).cloned())
    }

    pub fn insert(&self, item: T) -> Result<T, StoreError> {
        self.write(|items| {
            items.push(item.clone());
            item
        })
    }

    /// 修改指定记录，返回修改后的副本；记录不存在时返回 `None`
    pub fn update(&self, id: Uuid, f: impl FnOnce(&mut T)) -> Result<Option<T>, StoreError> {
        self.write(|items| {
            items.iter_mut().find(|item| item.id() == id).map(|item| {
                f(item);
                item.clone()
            })
        })
    }

    /// 删除指定记录，返回是否存在
    pub fn remove(&self, id: Uuid) -> Result<bool, StoreError> {
        self.write(|items| {
            let before = items.len();
            items.retain(|item| item.id() != id);
            items.len() != before
        })
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.read(|items| items.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.read(|items| items.is_empty())
    }
}

/// 快照文件格式
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub coupons: Vec<Coupon>,
    #[serde(default)]
    pub carts: Vec<Cart>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub content: Vec<HeroContent>,
}

/// 应用存储
pub struct Store {
    pub products: Collection<Product>,
    pub coupons: Collection<Coupon>,
    pub carts: Collection<Cart>,
    pub orders: Collection<Order>,
    pub content: Collection<HeroContent>,
}

impl Default for Store {
    fn default() -> Self {
        Self::from_snapshot(Snapshot::default())
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            products: Collection::new("products", snapshot.products),
            coupons: Collection::new("coupons", snapshot.coupons),
            carts: Collection::new("carts", snapshot.carts),
            orders: Collection::new("orders", snapshot.orders),
            content: Collection::new("content", snapshot.content),
        }
    }

    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        Ok(Snapshot {
            products: self.products.list()?,
            coupons: self.coupons.list()?,
            carts: self.carts.list()?,
            orders: self.orders.list()?,
            content: self.content.list()?,
        })
    }

    /// 从快照文件加载，文件不存在时返回空存储
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("snapshot {} not found, starting with an empty store", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        info!(
            "loaded snapshot {}: {} products, {} coupons, {} orders",
            path.display(),
            snapshot.products.len(),
            snapshot.coupons.len(),
            snapshot.orders.len()
        );

        Ok(Self::from_snapshot(snapshot))
    }

    /// 写出快照文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.snapshot()?)?;
        fs::write(path, content)?;
        info!("snapshot written to {}", path.display());

        Ok(())
    }
}
