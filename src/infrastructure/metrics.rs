// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 仓库操作计数器名称
pub const REPOSITORY_OPERATIONS_TOTAL: &str = "avenger_repository_operations_total";

/// 初始化指标系统
///
/// 启用时在配置的地址上启动 Prometheus 导出器
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.address, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        REPOSITORY_OPERATIONS_TOTAL,
        "Total number of avenger repository operations"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次仓库操作
pub fn record_repository_operation(operation: &'static str) {
    counter!(REPOSITORY_OPERATIONS_TOTAL, "operation" => operation).increment(1);
}
