// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::avenger::Avenger;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 创建或更新Avenger的请求体
///
/// `nick` 与 `person` 必须非空且不能只包含空白字符，
/// `description` 与 `history` 可省略。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AvengerRequestDto {
    #[validate(custom(function = "not_blank"))]
    pub nick: String,
    #[validate(custom(function = "not_blank"))]
    pub person: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub history: Option<String>,
}

impl AvengerRequestDto {
    /// 转换为尚未持久化的Avenger（创建）
    pub fn to_avenger(&self) -> Avenger {
        Avenger::new(
            self.nick.clone(),
            self.person.clone(),
            self.description.clone(),
            self.history.clone(),
        )
    }

    /// 转换为带有调用方指定ID的Avenger（更新）
    pub fn to_avenger_with_id(&self, id: i64) -> Avenger {
        Avenger::with_id(
            id,
            self.nick.clone(),
            self.person.clone(),
            self.description.clone(),
            self.history.clone(),
        )
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
