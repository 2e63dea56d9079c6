//! 站点内容业务服务

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::model::{HeroContent, UpdateHeroRequest, HERO_KEY};
use crate::core::error::CoreError;
use crate::infrastructure::store::Store;

#[derive(Clone)]
pub struct ContentService {
    store: Arc<Store>,
}

impl ContentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// 未设置时返回默认主视觉
    pub fn get_hero(&self) -> Result<HeroContent, CoreError> {
        Ok(self
            .store
            .content
            .find(|c| c.key == HERO_KEY)?
            .unwrap_or_default())
    }

    pub fn update_hero(&self, request: UpdateHeroRequest) -> Result<HeroContent, CoreError> {
        request.validate()?;

        let hero = self.store.content.write(|items| {
            let hero = HeroContent {
                id: Uuid::new_v4(),
                key: HERO_KEY.to_string(),
                kind: request.kind,
                url: request.url,
                alt: request.alt,
            };

            match items.iter_mut().find(|c| c.key == HERO_KEY) {
                Some(existing) => {
                    *existing = HeroContent {
                        id: existing.id,
                        ..hero
                    };
                    existing.clone()
                }
                None => {
                    items.push(hero.clone());
                    hero
                }
            }
        })?;

        info!("Hero content updated: {:?} {}", hero.kind, hero.url);
        Ok(hero)
    }
}
