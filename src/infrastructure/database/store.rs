// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::avenger_repository::RepositoryError;
use crate::infrastructure::database::entities::avenger;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// Avenger存储驱动特质
///
/// 持久化适配器所依赖的通用存储接口，以 SeaORM 的行结构交换数据。
/// `save` 具有 upsert 语义：行没有ID时插入，有ID时更新。
#[async_trait]
pub trait AvengerStore: Send + Sync {
    /// 根据ID查找
    async fn find_by_id(&self, id: i64) -> Result<Option<avenger::Model>, RepositoryError>;
    /// 查找全部，按ID升序
    async fn find_all(&self) -> Result<Vec<avenger::Model>, RepositoryError>;
    /// 插入或更新
    ///
    /// 更新不存在的ID时返回 [`RepositoryError::NotFound`]
    async fn save(&self, row: avenger::ActiveModel) -> Result<avenger::Model, RepositoryError>;
    /// 根据ID删除，返回受影响的行数
    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError>;
}

/// 基于 SeaORM 数据库连接的存储驱动
#[derive(Clone)]
pub struct SeaOrmAvengerStore {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmAvengerStore {
    /// 创建新的存储驱动
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AvengerStore for SeaOrmAvengerStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<avenger::Model>, RepositoryError> {
        let model = avenger::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model)
    }

    async fn find_all(&self) -> Result<Vec<avenger::Model>, RepositoryError> {
        let models = avenger::Entity::find()
            .order_by_asc(avenger::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models)
    }

    async fn save(&self, row: avenger::ActiveModel) -> Result<avenger::Model, RepositoryError> {
        if row.id.is_not_set() {
            return Ok(row.insert(self.db.as_ref()).await?);
        }

        match row.update(self.db.as_ref()).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        let result = avenger::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        Ok(result.rows_affected)
    }
}
