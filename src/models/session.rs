//! 会话与接口报文
//!
//! 与反馈 API 交互时使用的请求/响应结构

use crate::error::SurveyError;
use crate::models::answer::Answer;
use crate::models::question::Question;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 会话ID（服务端生成的不透明字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Result<Self, SurveyError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SurveyError::EmptySessionId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// POST /session/start
#[derive(Debug, Clone, Serialize)]
pub struct StartSessionRequest {
    pub consented: bool,
    pub research_version: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: String,
}

/// 只携带会话ID的请求体（/feedback/start 与 /session/end）
#[derive(Debug, Clone, Serialize)]
pub struct SessionRef<'a> {
    pub session_id: &'a str,
}

/// POST /feedback/start 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackStartResponse {
    pub questions: Vec<Question>,
}

/// POST /feedback/answer
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRequest<'a> {
    pub session_id: &'a str,
    pub q_key: &'a str,
    pub answer_numeric: Option<i64>,
    pub answer_text: Option<&'a str>,
}

impl<'a> AnswerRequest<'a> {
    pub fn new(session_id: &'a SessionId, answer: &'a Answer) -> Self {
        Self {
            session_id: session_id.as_str(),
            q_key: answer.question_key(),
            answer_numeric: answer.answer_numeric(),
            answer_text: answer.answer_text(),
        }
    }
}

/// GET /healthz
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
