// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// Avenger实体
///
/// 表示一条复仇者档案记录。`id` 在持久化之前为空，由存储层在创建时分配，
/// 分配后不再变化，是记录的唯一标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avenger {
    /// 记录ID，未持久化时为空
    pub id: Option<i64>,
    /// 代号，例如 "Iron Man"
    pub nick: String,
    /// 真实姓名，例如 "Tony Stark"
    pub person: String,
    /// 描述
    pub description: Option<String>,
    /// 背景故事
    pub history: Option<String>,
}

impl Avenger {
    /// 创建一个尚未持久化的Avenger
    ///
    /// # 参数
    ///
    /// * `nick` - 代号
    /// * `person` - 真实姓名
    /// * `description` - 描述
    /// * `history` - 背景故事
    pub fn new(
        nick: impl Into<String>,
        person: impl Into<String>,
        description: Option<String>,
        history: Option<String>,
    ) -> Self {
        Self {
            id: None,
            nick: nick.into(),
            person: person.into(),
            description,
            history,
        }
    }

    /// 创建一个带有指定ID的Avenger
    pub fn with_id(
        id: i64,
        nick: impl Into<String>,
        person: impl Into<String>,
        description: Option<String>,
        history: Option<String>,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(nick, person, description, history)
        }
    }
}
