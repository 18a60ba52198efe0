// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 阶段名称本地化特质
pub trait StageLocalizer: Send + Sync {
    /// 将阶段标题翻译为指定语言
    ///
    /// `language` 为空时使用系统默认语言；没有对应翻译时返回原标题
    fn localize(&self, stage_title: &str, language: Option<&str>) -> String;
}

/// 不做翻译，直接返回阶段标题
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStageTitle;

impl StageLocalizer for RawStageTitle {
    fn localize(&self, stage_title: &str, _language: Option<&str>) -> String {
        stage_title.to_string()
    }
}
