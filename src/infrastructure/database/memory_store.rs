// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::avenger_repository::RepositoryError;
use crate::infrastructure::database::entities::avenger;
use crate::infrastructure::database::store::AvengerStore;
use async_trait::async_trait;
use sea_orm::{ActiveValue, Value};
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i64, avenger::Model>,
    last_id: i64,
}

/// 内存存储驱动
///
/// 使用 `RwLock<BTreeMap>` 保存数据，ID 从 1 开始单调递增，删除后不复用。
/// 用于 `memory` 存储后端以及测试。
#[derive(Debug, Default)]
pub struct InMemoryAvengerStore {
    table: RwLock<Table>,
}

impl InMemoryAvengerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error() -> RepositoryError {
    RepositoryError::Storage("Failed to acquire avengers table lock".to_string())
}

fn required<V>(value: &ActiveValue<V>, column: &str) -> Result<V, RepositoryError>
where
    V: Into<Value> + Clone,
{
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => Ok(v.clone()),
        ActiveValue::NotSet => Err(RepositoryError::Storage(format!(
            "Column {} is not set",
            column
        ))),
    }
}

fn optional(value: &ActiveValue<Option<String>>) -> Option<String> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) => v.clone(),
        ActiveValue::NotSet => None,
    }
}

#[async_trait]
impl AvengerStore for InMemoryAvengerStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<avenger::Model>, RepositoryError> {
        let table = self.table.read().map_err(|_| lock_error())?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<avenger::Model>, RepositoryError> {
        let table = self.table.read().map_err(|_| lock_error())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn save(&self, row: avenger::ActiveModel) -> Result<avenger::Model, RepositoryError> {
        let nick = required(&row.nick, "nick")?;
        let person = required(&row.person, "person")?;
        let description = optional(&row.description);
        let history = optional(&row.history);

        let mut table = self.table.write().map_err(|_| lock_error())?;
        let id = match &row.id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => {
                if !table.rows.contains_key(id) {
                    return Err(RepositoryError::NotFound);
                }
                *id
            }
            ActiveValue::NotSet => {
                table.last_id += 1;
                table.last_id
            }
        };

        let model = avenger::Model {
            id,
            nick,
            person,
            description,
            history,
        };
        table.rows.insert(id, model.clone());
        Ok(model)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().map_err(|_| lock_error())?;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}
