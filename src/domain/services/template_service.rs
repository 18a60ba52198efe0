// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 模板渲染所需的占位符取值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateTokens<'a> {
    pub title: &'a str,
    pub user: &'a str,
    pub state: &'a str,
    pub category: &'a str,
}

impl<'a> TemplateTokens<'a> {
    fn pairs(&self) -> [(&'static str, &'a str); 4] {
        [
            ("{TITLE}", self.title),
            ("{USER}", self.user),
            ("{STATE}", self.state),
            ("{CATEGORY}", self.category),
        ]
    }
}

/// 渲染消息模板
///
/// 按 `{TITLE}`、`{USER}`、`{STATE}`、`{CATEGORY}` 的顺序做区分大小写的字面替换。
/// 已替换进去的文本不会再被扫描，因此取值中出现的占位符会原样保留。
pub fn render_template(template: &str, tokens: &TemplateTokens<'_>) -> String {
    let pairs = tokens.pairs();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    // Single left-to-right scan: inserted values are never revisited.
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match pairs.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
