// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与数据库等外部系统交互。
///
/// 包含的子模块：
/// - 数据库（database）：数据库连接、实体映射与存储驱动
/// - 指标（metrics）：Prometheus 指标导出
/// - 仓库实现（repositories）：领域仓库接口的具体实现
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知存储技术。
pub mod database;
pub mod metrics;
pub mod repositories;
