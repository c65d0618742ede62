//! 问卷状态 - 流程层
//!
//! 会话ID、题目列表与当前位置组成的不可变状态值。
//! 每个事件消费旧状态并返回新状态，不做任何 IO。

use crate::models::{Answer, Question, QuestionKind, SessionId};
use std::sync::Arc;

/// 当前阶段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// 等待作答
    Answering,
    /// 上一次提交失败，等待用户重试或跳过
    SubmitFailed {
        pending: Answer,
        reason: String,
        retryable: bool,
    },
}

/// 用户在某个视图上做出的选择
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// 选择量表值
    Scale(i64),
    /// 提交文本
    Text(String),
    /// 重新提交失败的答案
    Retry,
    /// 放弃失败的答案，进入下一题
    Skip,
    /// 退出
    Quit,
}

/// 状态转换事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEvent {
    /// 当前答案已被服务端接受
    Submitted,
    /// 当前答案提交失败
    SubmitFailed {
        answer: Answer,
        reason: String,
        retryable: bool,
    },
    /// 当前题目未记录答案，直接前进
    Skipped,
}

/// 问卷状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyState {
    session_id: SessionId,
    questions: Arc<[Question]>,
    position: usize,
    phase: Phase,
    answered: usize,
    skipped: usize,
}

impl SurveyState {
    pub fn new(session_id: SessionId, questions: Vec<Question>) -> Self {
        Self {
            session_id,
            questions: questions.into(),
            position: 0,
            phase: Phase::Answering,
            answered: 0,
            skipped: 0,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// 服务端确认收到的答案数
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// 未记录答案就前进的题目数
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    /// 等待重试的答案
    pub fn pending_answer(&self) -> Option<&Answer> {
        match &self.phase {
            Phase::SubmitFailed { pending, .. } => Some(pending),
            Phase::Answering => None,
        }
    }

    /// 可以重新提交的答案
    ///
    /// 失败被判定为不可重试（4xx、解析失败）时返回 `None`，只能跳过。
    pub fn retry_answer(&self) -> Option<&Answer> {
        match &self.phase {
            Phase::SubmitFailed {
                pending,
                retryable: true,
                ..
            } => Some(pending),
            _ => None,
        }
    }

    /// 把用户选择转换成当前题目的答案
    ///
    /// 选择与题型不符、量表值越界或当前不在作答阶段时返回 `None`。
    pub fn answer_for(&self, choice: &Choice) -> Option<Answer> {
        if self.phase != Phase::Answering {
            return None;
        }
        let question = self.current_question()?;

        match (question.kind, choice) {
            (QuestionKind::Likert, Choice::Scale(value)) if question.scale().contains(value) => {
                Some(Answer::numeric(&question.key, *value))
            }
            (QuestionKind::FreeText, Choice::Text(raw)) => Some(Answer::text(&question.key, raw)),
            _ => None,
        }
    }

    /// 应用事件，返回新状态
    ///
    /// 位置每次最多前进一格，到达列表长度后不再变化。
    #[must_use]
    pub fn apply(self, event: SurveyEvent) -> Self {
        match event {
            _ if self.is_complete() => self,
            SurveyEvent::Submitted => Self {
                position: self.position + 1,
                answered: self.answered + 1,
                phase: Phase::Answering,
                ..self
            },
            SurveyEvent::Skipped => Self {
                position: self.position + 1,
                skipped: self.skipped + 1,
                phase: Phase::Answering,
                ..self
            },
            SurveyEvent::SubmitFailed {
                answer,
                reason,
                retryable,
            } => Self {
                phase: Phase::SubmitFailed {
                    pending: answer,
                    reason,
                    retryable,
                },
                ..self
            },
        }
    }
}
