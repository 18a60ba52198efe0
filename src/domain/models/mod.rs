// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 流转（transition）：流转完成事件及其执行用户和条目信息
/// - 网络钩子（webhook）：Webhook配置、渲染后的请求和调度结果
pub mod transition;
pub mod webhook;
