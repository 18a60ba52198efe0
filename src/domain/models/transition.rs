// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::repositories::item_repository::ItemLookup;

/// 执行流转的用户
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActingUser {
    /// 用户邮箱
    pub email: String,
    /// 用户偏好的后台语言，为空时使用系统默认语言
    #[serde(default)]
    pub admin_language: Option<String>,
}

/// 条目展示信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "category")]
    pub category_name: String,
}

/// 流转完成事件
///
/// 每次流转完成时由宿主生成，调度器只读。
/// 事件只在一次通知调用期间存在。
#[derive(Clone)]
pub struct TransitionEvent {
    /// 上下文标识，形如 `component.view`
    pub context_key: String,
    /// 目标内容类型名称
    pub extension_name: Option<String>,
    /// 受影响条目ID，按处理顺序排列
    pub item_ids: Vec<i64>,
    /// 目标阶段标题
    pub to_stage_name: String,
    /// 执行流转的用户
    pub acting_user: ActingUser,
    /// 条目信息查询
    pub item_lookup: Arc<dyn ItemLookup>,
}

impl fmt::Debug for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionEvent")
            .field("context_key", &self.context_key)
            .field("extension_name", &self.extension_name)
            .field("item_ids", &self.item_ids)
            .field("to_stage_name", &self.to_stage_name)
            .field("acting_user", &self.acting_user)
            .finish_non_exhaustive()
    }
}
