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

use avengers_api::config::settings::{Settings, StorageBackend};
use avengers_api::infrastructure::database::connection;
use avengers_api::infrastructure::database::memory_store::InMemoryAvengerStore;
use avengers_api::infrastructure::database::store::SeaOrmAvengerStore;
use avengers_api::infrastructure::metrics;
use avengers_api::infrastructure::repositories::avenger_repo_impl::AvengerRepositoryImpl;
use avengers_api::presentation::routes;
use avengers_api::utils::telemetry;
use axum::Router;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting avengers-api...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Prometheus Metrics
    metrics::init_metrics(&settings.metrics);

    // 4. Build the storage backend
    let app = build_app(&settings).await?;

    // 5. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_app(settings: &Settings) -> anyhow::Result<Router> {
    match settings.storage.backend {
        StorageBackend::Database => {
            let db = Arc::new(connection::create_pool(&settings.database).await?);
            info!("Database connection established");

            info!("Running database migrations...");
            Migrator::up(db.as_ref(), None).await?;
            info!("Database migrations applied");

            let store = Arc::new(SeaOrmAvengerStore::new(db));
            Ok(routes::app(Arc::new(AvengerRepositoryImpl::new(store))))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage, data will not survive a restart");
            let store = Arc::new(InMemoryAvengerStore::new());
            Ok(routes::app(Arc::new(AvengerRepositoryImpl::new(store))))
        }
    }
}
