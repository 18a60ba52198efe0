// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含Webhook调度的核心业务逻辑，包括：
/// - 领域模型（models）：流转事件、Webhook配置和调度结果
/// - 仓库接口（repositories）：条目信息查询的抽象接口
/// - 服务（services）：模板渲染、上下文过滤和各类协作者接口
/// - 用例（use_cases）：Webhook调度流程
///
/// 领域层不依赖任何具体的HTTP客户端或宿主实现。
pub mod models;
pub mod repositories;
pub mod services;
pub mod use_cases;
