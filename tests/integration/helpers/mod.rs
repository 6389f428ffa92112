// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use avengers_api::infrastructure::database::memory_store::InMemoryAvengerStore;
use avengers_api::infrastructure::database::store::SeaOrmAvengerStore;
use avengers_api::infrastructure::repositories::avenger_repo_impl::AvengerRepositoryImpl;
use avengers_api::presentation::routes;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

pub type DbAvengerRepository = AvengerRepositoryImpl<SeaOrmAvengerStore>;

/// 创建已完成迁移的内存 SQLite 数据库
///
/// 只保留一个连接，否则每个连接都会看到各自独立的内存数据库
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

/// 创建基于 SQLite 的仓库
pub async fn create_db_repository() -> Arc<DbAvengerRepository> {
    let store = Arc::new(SeaOrmAvengerStore::new(create_test_db().await));
    Arc::new(AvengerRepositoryImpl::new(store))
}

/// 创建基于 SQLite 存储的测试服务器
pub async fn create_test_server() -> TestServer {
    let repo = create_db_repository().await;
    TestServer::new(routes::app(repo)).unwrap()
}

/// 创建基于内存存储的测试服务器
pub fn create_memory_test_server() -> TestServer {
    let store = Arc::new(InMemoryAvengerStore::new());
    let repo = Arc::new(AvengerRepositoryImpl::new(store));
    TestServer::new(routes::app(repo)).unwrap()
}
