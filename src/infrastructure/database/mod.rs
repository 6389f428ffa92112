// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供数据库连接、实体定义以及存储驱动
/// - 连接池（connection）
/// - 实体（entities）
/// - 存储驱动（store）：按ID查找、查找全部、保存、按ID删除
/// - 内存存储驱动（memory_store）
pub mod connection;
pub mod entities;
pub mod memory_store;
pub mod store;
