//! 题目模型
//!
//! 服务端下发的题目列表，顺序即作答顺序

use crate::error::SurveyError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// 量表题缺省下限
pub const DEFAULT_SCALE_MIN: i64 = 1;
/// 量表题缺省上限
pub const DEFAULT_SCALE_MAX: i64 = 5;

/// 题目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// 量表题（Likert），按整数区间渲染为按钮
    Likert,
    /// 开放文本题，服务端当前下发的是 "text"
    #[serde(alias = "text")]
    FreeText,
}

/// 单个题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<i64>,
}

impl Question {
    /// 创建量表题
    pub fn likert(key: impl Into<String>, label: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: QuestionKind::Likert,
            scale_min: Some(min),
            scale_max: Some(max),
        }
    }

    /// 创建开放文本题
    pub fn free_text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind: QuestionKind::FreeText,
            scale_min: None,
            scale_max: None,
        }
    }

    /// 量表闭区间，缺省为 1..=5
    ///
    /// 下限大于上限时区间为空，不做修正。
    pub fn scale(&self) -> RangeInclusive<i64> {
        self.scale_min.unwrap_or(DEFAULT_SCALE_MIN)..=self.scale_max.unwrap_or(DEFAULT_SCALE_MAX)
    }
}

/// 校验题目列表：key 在列表内必须唯一
pub fn validate_question_list(questions: &[Question]) -> Result<(), SurveyError> {
    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.key.as_str()) {
            return Err(SurveyError::DuplicateQuestionKey {
                key: question.key.clone(),
            });
        }
    }
    Ok(())
}
