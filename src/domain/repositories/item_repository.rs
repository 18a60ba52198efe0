// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::transition::ItemDetails;
use anyhow::Result;
use async_trait::async_trait;

/// 条目信息查询特质
///
/// 由宿主提供，返回条目标题和分类名称
#[async_trait]
pub trait ItemLookup: Send + Sync {
    /// 根据ID查找条目
    ///
    /// # 参数
    ///
    /// * `item_id` - 条目ID
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(ItemDetails))` - 找到条目
    /// * `Ok(None)` - 条目不存在
    /// * `Err(anyhow::Error)` - 查询失败
    async fn find_item(&self, item_id: i64) -> Result<Option<ItemDetails>>;
}
