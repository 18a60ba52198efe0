// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 指标（metrics）：Prometheus指标导出
/// - 仓库实现（repositories）：条目信息查询的实现
/// - 服务实现（services）：HTTP传输、阶段名称本地化和用户提示队列
pub mod metrics;
pub mod repositories;
pub mod services;
