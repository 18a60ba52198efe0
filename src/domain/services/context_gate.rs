// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;

/// 上下文过滤
///
/// 判断某个流转上下文是否需要发送Webhook。上下文至少包含
/// `component.view` 两段，并可通过允许列表和禁止列表限制。
/// 列表项可以是完整上下文，也可以只写组件名。
#[derive(Debug, Clone, Default)]
pub struct ContextGate {
    allowed: HashSet<String>,
    forbidden: HashSet<String>,
}

impl ContextGate {
    pub fn new<A, F>(allowed: A, forbidden: F) -> Self
    where
        A: IntoIterator<Item = String>,
        F: IntoIterator<Item = String>,
    {
        Self {
            allowed: allowed.into_iter().filter(|c| !c.is_empty()).collect(),
            forbidden: forbidden.into_iter().filter(|c| !c.is_empty()).collect(),
        }
    }

    /// 接受所有格式正确的上下文
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn is_supported(&self, context: &str) -> bool {
        let mut parts = context.split('.');
        let component = match (parts.next(), parts.next()) {
            (Some(component), Some(view)) if !component.is_empty() && !view.is_empty() => {
                component
            }
            _ => return false,
        };

        if self.forbidden.contains(context) || self.forbidden.contains(component) {
            return false;
        }

        self.allowed.is_empty() || self.allowed.contains(context) || self.allowed.contains(component)
    }
}
