// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use avengers_api::config::settings::{Settings, StorageBackend};

/// 从 config/default.toml 加载配置
#[test]
fn test_config_loading_from_default_toml() {
    let settings = Settings::new().expect("Failed to load configuration");

    assert!(!settings.server.host.is_empty());
    assert!(settings.server.port > 0);
    assert!(!settings.database.url.is_empty());
    assert!(matches!(
        settings.storage.backend,
        StorageBackend::Database | StorageBackend::Memory
    ));
    assert!(!settings.metrics.address.is_empty());
}
