// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 定义系统中各组件之间交换的业务实体，不暴露任何存储相关的结构。
pub mod avenger;
