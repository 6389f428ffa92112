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

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::avenger_request::AvengerRequestDto,
        use_cases::avenger_use_case::{AvengerUseCase, AvengerUseCaseError},
    },
    domain::{models::avenger::Avenger, repositories::avenger_repository::AvengerRepository},
    presentation::errors::AppError,
};

/// Avenger资源的基础路径
pub const AVENGER_PATH: &str = "/v1/api/avenger";

/// 获取全部Avenger
pub async fn list_avengers<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Avenger>>, AppError>
where
    R: AvengerRepository + 'static,
{
    let avengers = AvengerUseCase::new(repo).list().await?;
    Ok(Json(avengers))
}

/// 获取Avenger详情
pub async fn get_avenger<R>(
    Extension(repo): Extension<Arc<R>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Avenger>, AppError>
where
    R: AvengerRepository + 'static,
{
    let Path(id) = id?;
    match AvengerUseCase::new(repo).get_detail(id).await? {
        Some(avenger) => Ok(Json(avenger)),
        None => Err(AvengerUseCaseError::NotFound(id).into()),
    }
}

/// 创建Avenger
///
/// 成功时返回 201 和 `Location` 头
pub async fn create_avenger<R>(
    Extension(repo): Extension<Arc<R>>,
    payload: Result<Json<AvengerRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    R: AvengerRepository + 'static,
{
    let Json(payload) = payload?;
    let avenger = AvengerUseCase::new(repo).create(payload).await?;

    let location = match avenger.id {
        Some(id) => format!("{}/{}", AVENGER_PATH, id),
        None => AVENGER_PATH.to_string(),
    };
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(avenger),
    ))
}

/// 整体更新Avenger
pub async fn update_avenger<R>(
    Extension(repo): Extension<Arc<R>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AvengerRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    R: AvengerRepository + 'static,
{
    let Path(id) = id?;
    let Json(payload) = payload?;
    let avenger = AvengerUseCase::new(repo).update(id, payload).await?;
    Ok((StatusCode::ACCEPTED, Json(avenger)))
}

/// 删除Avenger
pub async fn delete_avenger<R>(
    Extension(repo): Extension<Arc<R>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError>
where
    R: AvengerRepository + 'static,
{
    let Path(id) = id?;
    AvengerUseCase::new(repo).delete(id).await?;
    Ok(StatusCode::ACCEPTED)
}
