//! 视图推导
//!
//! `render` 是 (题目列表, 位置, 阶段) 的纯函数，终端适配器只负责画出来。

use crate::models::QuestionKind;
use crate::workflow::survey_state::{Phase, SurveyState};
use std::ops::RangeInclusive;

/// 输入控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// 闭区间内每个整数一个按钮；区间只保存端点
    Likert { scale: RangeInclusive<i64> },
    /// 文本输入框
    FreeText,
}

/// 当前应显示的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Question {
        /// 从 1 开始的题号
        number: usize,
        total: usize,
        label: String,
        control: Control,
    },
    Failed {
        number: usize,
        total: usize,
        label: String,
        reason: String,
        retryable: bool,
    },
    Completion {
        export_url: String,
        answered: usize,
        skipped: usize,
    },
}

/// 推导当前视图
pub fn render(state: &SurveyState, export_url: &str) -> View {
    let question = match state.current_question() {
        Some(question) => question,
        None => {
            return View::Completion {
                export_url: export_url.to_string(),
                answered: state.answered(),
                skipped: state.skipped(),
            }
        }
    };

    let number = state.position() + 1;
    let total = state.questions().len();

    match state.phase() {
        Phase::SubmitFailed {
            reason, retryable, ..
        } => View::Failed {
            number,
            total,
            label: question.label.clone(),
            reason: reason.clone(),
            retryable: *retryable,
        },
        Phase::Answering => {
            let control = match question.kind {
                QuestionKind::Likert => Control::Likert {
                    scale: question.scale(),
                },
                QuestionKind::FreeText => Control::FreeText,
            };
            View::Question {
                number,
                total,
                label: question.label.clone(),
                control,
            }
        }
    }
}
