// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::avenger_repository::AvengerRepository;
use crate::presentation::handlers::avenger_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 处理器通过 `Extension<Arc<R>>` 获取仓库，调用方需要自行添加该层，
/// 或者直接使用 [`app`]。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<R>() -> Router
where
    R: AvengerRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let avenger_routes = Router::new()
        .route(
            avenger_handler::AVENGER_PATH,
            get(avenger_handler::list_avengers::<R>).post(avenger_handler::create_avenger::<R>),
        )
        .route(
            &format!("{}/{{id}}", avenger_handler::AVENGER_PATH),
            get(avenger_handler::get_avenger::<R>)
                .put(avenger_handler::update_avenger::<R>)
                .delete(avenger_handler::delete_avenger::<R>),
        );

    Router::new().merge(public_routes).merge(avenger_routes)
}

/// 创建完整应用
///
/// 在 [`routes`] 的基础上注入仓库并添加请求追踪层
pub fn app<R>(repo: Arc<R>) -> Router
where
    R: AvengerRepository + 'static,
{
    routes::<R>().layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(Extension(repo)),
    )
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
