// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::avenger::Avenger;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 非数据库存储后端错误
    #[error("Storage error: {0}")]
    Storage(String),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// Avenger仓库特质
///
/// 定义Avenger数据访问接口，与具体存储技术解耦。
/// 每种存储后端提供一个实现。
#[async_trait]
pub trait AvengerRepository: Send + Sync {
    /// 根据ID获取详情，不存在时返回 `None`
    async fn get_detail(&self, id: i64) -> Result<Option<Avenger>, RepositoryError>;
    /// 获取全部记录，顺序由存储决定
    async fn get_avengers(&self) -> Result<Vec<Avenger>, RepositoryError>;
    /// 创建新记录
    ///
    /// 忽略调用方传入的 `id`，返回带有新分配 `id` 的记录
    async fn create(&self, avenger: &Avenger) -> Result<Avenger, RepositoryError>;
    /// 根据ID删除记录，记录不存在时不做任何操作
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    /// 整体替换 `avenger.id` 对应的记录
    ///
    /// `id` 为空或记录不存在时返回 [`RepositoryError::NotFound`]
    async fn update(&self, avenger: &Avenger) -> Result<Avenger, RepositoryError>;
}
