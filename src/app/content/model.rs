//! 站点内容数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::infrastructure::store::Record;

pub const HERO_KEY: &str = "hero";

const DEFAULT_HERO_URL: &str =
    "https://images.unsplash.com/photo-1483985988355-763728e1935b?w=1920&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// 首页主视觉
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    pub id: Uuid,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Record for HeroContent {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            key: HERO_KEY.to_string(),
            kind: MediaKind::Image,
            url: DEFAULT_HERO_URL.to_string(),
            alt: Some("Fashion Model".to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHeroRequest {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[validate(length(min = 1, message = "Url must not be empty"))]
    pub url: String,
    pub alt: Option<String>,
}
