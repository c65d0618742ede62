use serde::Serialize;
use std::fmt;

/// 单题答案
///
/// `answer_numeric` 与 `answer_text` 恰有一个有值，由构造函数保证。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    question_key: String,
    answer_numeric: Option<i64>,
    answer_text: Option<String>,
}

impl Answer {
    /// 量表题答案
    pub fn numeric(question_key: impl Into<String>, value: i64) -> Self {
        Self {
            question_key: question_key.into(),
            answer_numeric: Some(value),
            answer_text: None,
        }
    }

    /// 开放文本题答案（去掉首尾空白）
    pub fn text(question_key: impl Into<String>, raw: &str) -> Self {
        Self {
            question_key: question_key.into(),
            answer_numeric: None,
            answer_text: Some(raw.trim().to_string()),
        }
    }

    pub fn question_key(&self) -> &str {
        &self.question_key
    }

    pub fn answer_numeric(&self) -> Option<i64> {
        self.answer_numeric
    }

    pub fn answer_text(&self) -> Option<&str> {
        self.answer_text.as_deref()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.answer_numeric, &self.answer_text) {
            (Some(value), _) => write!(f, "{} = {}", self.question_key, value),
            (None, Some(text)) => write!(f, "{} = \"{}\"", self.question_key, text),
            (None, None) => write!(f, "{} = <空>", self.question_key),
        }
    }
}
