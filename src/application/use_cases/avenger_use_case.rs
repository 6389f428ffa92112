// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    application::dto::avenger_request::AvengerRequestDto,
    domain::{
        models::avenger::Avenger,
        repositories::avenger_repository::{AvengerRepository, RepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Error, Debug)]
pub enum AvengerUseCaseError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Avenger {0} not found")]
    NotFound(i64),
}

/// Avenger用例
///
/// 校验请求、映射为领域模型并调用仓库。校验失败时不会访问仓库。
pub struct AvengerUseCase<R> {
    repo: Arc<R>,
}

impl<R> AvengerUseCase<R>
where
    R: AvengerRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, dto: AvengerRequestDto) -> Result<Avenger, AvengerUseCaseError> {
        validate(&dto)?;

        let avenger = self.repo.create(&dto.to_avenger()).await?;
        info!(avenger_id = ?avenger.id, nick = %avenger.nick, "Avenger created");
        Ok(avenger)
    }

    pub async fn get_detail(&self, id: i64) -> Result<Option<Avenger>, AvengerUseCaseError> {
        Ok(self.repo.get_detail(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Avenger>, AvengerUseCaseError> {
        Ok(self.repo.get_avengers().await?)
    }

    /// 整体替换指定ID的记录，记录不存在时返回 `NotFound`
    pub async fn update(
        &self,
        id: i64,
        dto: AvengerRequestDto,
    ) -> Result<Avenger, AvengerUseCaseError> {
        validate(&dto)?;

        let avenger = match self.repo.update(&dto.to_avenger_with_id(id)).await {
            Ok(avenger) => avenger,
            Err(RepositoryError::NotFound) => return Err(AvengerUseCaseError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        info!(avenger_id = id, "Avenger updated");
        Ok(avenger)
    }

    /// 删除指定ID的记录，记录不存在时同样返回成功
    pub async fn delete(&self, id: i64) -> Result<(), AvengerUseCaseError> {
        self.repo.delete(id).await?;
        info!(avenger_id = id, "Avenger deleted");
        Ok(())
    }
}

fn validate(dto: &AvengerRequestDto) -> Result<(), AvengerUseCaseError> {
    dto.validate()
        .map_err(|e| AvengerUseCaseError::ValidationError(e.to_string()))
}
