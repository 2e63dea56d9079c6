//! 反序列化辅助函数

use serde::{Deserialize, Deserializer};

/// 区分字段缺失和显式 `null`
///
/// 配合 `#[serde(default)]` 使用：缺失为 `None`，`null` 为 `Some(None)`，有值为 `Some(Some(v))`。
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
