// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::use_cases::avenger_use_case::AvengerUseCaseError;
use crate::domain::repositories::avenger_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的HTTP状态码
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<AvengerUseCaseError>() {
            return match err {
                AvengerUseCaseError::ValidationError(_) => StatusCode::BAD_REQUEST,
                AvengerUseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
                AvengerUseCaseError::Repository(RepositoryError::NotFound) => {
                    StatusCode::NOT_FOUND
                }
                AvengerUseCaseError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // 请求体无法解析或缺少必填字段
            None if self.0.is::<JsonRejection>() => StatusCode::BAD_REQUEST,
            // 路径中的ID不是合法整数
            None if self.0.is::<PathRejection>() => StatusCode::BAD_REQUEST,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(error = %error_message, "Request failed");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
