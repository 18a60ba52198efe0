// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 条目信息由宿主系统提供，领域层只依赖查询接口
pub mod item_repository;
