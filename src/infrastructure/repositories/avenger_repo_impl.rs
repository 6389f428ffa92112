// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::avenger::Avenger;
use crate::domain::repositories::avenger_repository::{AvengerRepository, RepositoryError};
use crate::infrastructure::database::entities::avenger;
use crate::infrastructure::database::store::AvengerStore;
use crate::infrastructure::metrics::record_repository_operation;
use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use std::sync::Arc;
use tracing::debug;

/// Avenger仓库实现
///
/// 将领域操作转换为存储驱动调用，并在领域模型与存储行结构之间逐字段映射。
/// 不做任何缓存，每次调用都会访问存储。
pub struct AvengerRepositoryImpl<S: AvengerStore> {
    /// 存储驱动
    store: Arc<S>,
}

impl<S: AvengerStore> AvengerRepositoryImpl<S> {
    /// 创建新的Avenger仓库实例
    ///
    /// # 参数
    ///
    /// * `store` - 存储驱动
    ///
    /// # 返回值
    ///
    /// 返回新的Avenger仓库实例
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: AvengerStore> AvengerRepository for AvengerRepositoryImpl<S> {
    async fn get_detail(&self, id: i64) -> Result<Option<Avenger>, RepositoryError> {
        record_repository_operation("get_detail");
        debug!(avenger_id = id, "Fetching avenger");

        let model = self.store.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn get_avengers(&self) -> Result<Vec<Avenger>, RepositoryError> {
        record_repository_operation("get_avengers");

        let models = self.store.find_all().await?;
        debug!(count = models.len(), "Fetched avengers");
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, avenger: &Avenger) -> Result<Avenger, RepositoryError> {
        record_repository_operation("create");

        let mut row = to_active_model(avenger);
        row.id = NotSet;

        let model = self.store.save(row).await?;
        debug!(avenger_id = model.id, nick = %model.nick, "Created avenger");
        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        record_repository_operation("delete");

        let affected = self.store.delete_by_id(id).await?;
        debug!(avenger_id = id, affected, "Deleted avenger");
        Ok(())
    }

    async fn update(&self, avenger: &Avenger) -> Result<Avenger, RepositoryError> {
        record_repository_operation("update");

        // 未知ID由 save 返回 NotFound
        let id = avenger.id.ok_or(RepositoryError::NotFound)?;
        let model = self.store.save(to_active_model(avenger)).await?;
        debug!(avenger_id = id, "Updated avenger");
        Ok(model.into())
    }
}

fn to_active_model(avenger: &Avenger) -> avenger::ActiveModel {
    avenger::ActiveModel {
        id: avenger.id.map_or(NotSet, Set),
        nick: Set(avenger.nick.clone()),
        person: Set(avenger.person.clone()),
        description: Set(avenger.description.clone()),
        history: Set(avenger.history.clone()),
    }
}

impl From<avenger::Model> for Avenger {
    fn from(model: avenger::Model) -> Self {
        Self {
            id: Some(model.id),
            nick: model.nick,
            person: model.person,
            description: model.description,
            history: model.history,
        }
    }
}
