// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::transition::ItemDetails;
use crate::domain::repositories::item_repository::ItemLookup;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// 内存条目仓库
///
/// 宿主在通知中直接携带条目信息时使用
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    items: HashMap<i64, ItemDetails>,
}

impl InMemoryItemRepository {
    pub fn new(items: HashMap<i64, ItemDetails>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemLookup for InMemoryItemRepository {
    async fn find_item(&self, item_id: i64) -> Result<Option<ItemDetails>> {
        Ok(self.items.get(&item_id).cloned())
    }
}
