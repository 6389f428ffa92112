// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_db_repository;
use avengers_api::domain::models::avenger::Avenger;
use avengers_api::domain::repositories::avenger_repository::{AvengerRepository, RepositoryError};

fn avenger(nick: &str, person: &str) -> Avenger {
    Avenger::new(nick, person, None, None)
}

/// 测试创建后按ID读取得到完全相同的记录
#[tokio::test]
async fn test_create_then_get_detail_round_trip() {
    let repo = create_db_repository().await;
    let input = Avenger::new(
        "Doctor Strange",
        "Stephen Strange",
        Some("Sorcerer Supreme".to_string()),
        Some("Former neurosurgeon".to_string()),
    );

    let created = repo.create(&input).await.unwrap();
    let id = created.id.expect("id should be assigned");

    let found = repo.get_detail(id).await.unwrap().unwrap();
    assert_eq!(found, Avenger { id: Some(id), ..input });
}

/// 测试创建时忽略调用方传入的ID
#[tokio::test]
async fn test_create_assigns_fresh_id() {
    let repo = create_db_repository().await;
    let input = Avenger::with_id(500, "Vision", "Vision", None, None);

    let created = repo.create(&input).await.unwrap();

    assert_ne!(created.id, Some(500));
    assert!(repo.get_detail(500).await.unwrap().is_none());
}

/// 测试更新只改变被修改的字段
#[tokio::test]
async fn test_update_reflects_only_modified_field() {
    let repo = create_db_repository().await;
    let created = repo
        .create(&Avenger::new(
            "Spider-Man",
            "Peter Parker",
            Some("Friendly neighbourhood".to_string()),
            Some("Queens".to_string()),
        ))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let modified = Avenger {
        history: Some("Bitten by a spider".to_string()),
        ..created.clone()
    };
    repo.update(&modified).await.unwrap();

    let found = repo.get_detail(id).await.unwrap().unwrap();
    assert_eq!(found.history.as_deref(), Some("Bitten by a spider"));
    assert_eq!(found.nick, created.nick);
    assert_eq!(found.person, created.person);
    assert_eq!(found.description, created.description);
}

/// 测试更新是整体替换而不是部分修改
#[tokio::test]
async fn test_update_clears_omitted_optional_fields() {
    let repo = create_db_repository().await;
    let created = repo
        .create(&Avenger::new(
            "Scarlet Witch",
            "Wanda Maximoff",
            Some("Chaos magic".to_string()),
            None,
        ))
        .await
        .unwrap();
    let id = created.id.unwrap();

    let updated = repo
        .update(&Avenger::with_id(id, "Scarlet Witch", "Wanda Maximoff", None, None))
        .await
        .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(repo.get_detail(id).await.unwrap().unwrap().description, None);
}

/// 测试更新不存在的记录返回 NotFound 且不会插入新记录
#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let repo = create_db_repository().await;

    let result = repo
        .update(&Avenger::with_id(404, "Nobody", "No One", None, None))
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound)));
    assert!(repo.get_avengers().await.unwrap().is_empty());
}

/// 测试删除后读取为空，重复删除不报错
#[tokio::test]
async fn test_delete_then_get_detail_is_absent() {
    let repo = create_db_repository().await;
    let created = repo.create(&avenger("Quicksilver", "Pietro Maximoff")).await.unwrap();
    let id = created.id.unwrap();

    repo.delete(id).await.unwrap();
    assert!(repo.get_detail(id).await.unwrap().is_none());

    repo.delete(id).await.unwrap();
}

/// 测试创建 N 条记录后全部可以列出
#[tokio::test]
async fn test_get_avengers_returns_every_created_record() {
    let repo = create_db_repository().await;
    let names = [
        ("Iron Man", "Tony Stark"),
        ("Captain America", "Steve Rogers"),
        ("Thor", "Thor Odinson"),
        ("Hulk", "Bruce Banner"),
    ];

    let mut created = Vec::new();
    for (nick, person) in names {
        created.push(repo.create(&avenger(nick, person)).await.unwrap());
    }

    let mut listed = repo.get_avengers().await.unwrap();
    listed.sort_by_key(|a| a.id);
    created.sort_by_key(|a| a.id);

    assert_eq!(listed.len(), names.len());
    assert_eq!(listed, created);
}
