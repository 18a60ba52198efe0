// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::localization_service::StageLocalizer;
use std::collections::HashMap;

/// 基于翻译表的阶段名称本地化
///
/// 查找顺序：用户语言、系统默认语言、原始标题
#[derive(Debug, Clone, Default)]
pub struct CatalogStageLocalizer {
    default_language: String,
    catalogs: HashMap<String, HashMap<String, String>>,
}

impl CatalogStageLocalizer {
    pub fn new(
        default_language: impl Into<String>,
        catalogs: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        Self {
            default_language: default_language.into(),
            catalogs,
        }
    }

    fn translate(&self, language: &str, stage_title: &str) -> Option<&str> {
        self.catalogs
            .get(language)
            .and_then(|catalog| catalog.get(stage_title))
            .map(String::as_str)
    }
}

impl StageLocalizer for CatalogStageLocalizer {
    fn localize(&self, stage_title: &str, language: Option<&str>) -> String {
        let language = language
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.default_language);

        self.translate(language, stage_title)
            .or_else(|| self.translate(&self.default_language, stage_title))
            .unwrap_or(stage_title)
            .to_string()
    }
}
