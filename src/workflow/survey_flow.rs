//! 作答流程 - 流程层
//!
//! 把用户选择变成提交动作，再把提交结果变成状态事件。
//! 提交结果是显式的：成功才前进，失败进入可重试状态
//! （`advance_on_submit_failure` 打开时改为记录警告后直接前进）。

use tracing::{debug, warn};

use crate::config::Config;
use crate::models::Answer;
use crate::services::AnswerService;
use crate::workflow::survey_state::{Choice, Phase, SurveyEvent, SurveyState};

/// 作答流程
///
/// - 不持有题目列表，状态由调用方传入并取回
/// - 只依赖业务能力（services）
pub struct SurveyFlow {
    answer_service: AnswerService,
    advance_on_submit_failure: bool,
}

impl SurveyFlow {
    pub fn new(answer_service: AnswerService, config: &Config) -> Self {
        Self {
            answer_service,
            advance_on_submit_failure: config.advance_on_submit_failure,
        }
    }

    /// 处理一次用户选择，返回新状态
    ///
    /// 提交请求结束之前不会返回，因此同一时刻最多只有一个提交在进行。
    pub async fn step(&self, state: SurveyState, choice: Choice) -> SurveyState {
        match choice {
            Choice::Quit => state,
            Choice::Skip => {
                if !matches!(state.phase(), Phase::SubmitFailed { .. }) {
                    return state;
                }
                warn!(
                    "[会话 {}] ⏭️ 跳过第 {} 题，答案未记录",
                    state.session_id(),
                    state.position() + 1
                );
                state.apply(SurveyEvent::Skipped)
            }
            Choice::Retry => {
                let pending = state.retry_answer().cloned();
                match pending {
                    Some(answer) => {
                        debug!("[会话 {}] 🔁 重新提交: {}", state.session_id(), answer);
                        self.submit(state, answer).await
                    }
                    None => {
                        debug!("[会话 {}] 当前没有可重试的答案", state.session_id());
                        state
                    }
                }
            }
            other => match state.answer_for(&other) {
                Some(answer) => self.submit(state, answer).await,
                None => {
                    debug!(
                        "[会话 {}] 忽略无效输入: {:?}",
                        state.session_id(),
                        other
                    );
                    state
                }
            },
        }
    }

    async fn submit(&self, state: SurveyState, answer: Answer) -> SurveyState {
        let result = self.answer_service.submit(state.session_id(), &answer).await;
        match result {
            Ok(()) => state.apply(SurveyEvent::Submitted),
            Err(e) if self.advance_on_submit_failure => {
                warn!(
                    "[会话 {}] ⚠️ 提交失败但继续前进: {}",
                    state.session_id(),
                    e
                );
                state.apply(SurveyEvent::Skipped)
            }
            Err(e) => state.apply(SurveyEvent::SubmitFailed {
                answer,
                reason: e.to_string(),
                retryable: e.is_retryable(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::FeedbackClient;
    use crate::models::{Question, SessionId};
    use httpmock::prelude::*;

    fn flow_for(server: &MockServer) -> SurveyFlow {
        let config = Config {
            api_base_url: server.base_url(),
            ..Config::default()
        };
        let client = FeedbackClient::new(&config).unwrap();
        SurveyFlow::new(AnswerService::new(client), &config)
    }

    #[tokio::test]
    async fn test_retry_ignored_when_failure_not_retryable() {
        let server = MockServer::start_async().await;
        let answers = server
            .mock_async(|when, then| {
                when.method(POST).path("/feedback/answer");
                then.status(200).json_body(serde_json::json!({ "ok": true }));
            })
            .await;
        let flow = flow_for(&server);

        let state = SurveyState::new(
            SessionId::new("s1").unwrap(),
            vec![Question::likert("a", "A", 1, 5)],
        )
        .apply(SurveyEvent::SubmitFailed {
            answer: Answer::numeric("a", 3),
            reason: "HTTP 422".to_string(),
            retryable: false,
        });

        let after = flow.step(state.clone(), Choice::Retry).await;
        answers.assert_calls_async(0).await;
        assert_eq!(after, state);

        let skipped = flow.step(after, Choice::Skip).await;
        assert_eq!(skipped.position(), 1);
        assert_eq!(skipped.skipped(), 1);
    }

    #[tokio::test]
    async fn test_retry_resends_when_failure_retryable() {
        let server = MockServer::start_async().await;
        let answers = server
            .mock_async(|when, then| {
                when.method(POST).path("/feedback/answer");
                then.status(200).json_body(serde_json::json!({ "ok": true }));
            })
            .await;

        let state = SurveyState::new(
            SessionId::new("s1").unwrap(),
            vec![Question::likert("a", "A", 1, 5)],
        )
        .apply(SurveyEvent::SubmitFailed {
            answer: Answer::numeric("a", 3),
            reason: "HTTP 503".to_string(),
            retryable: true,
        });

        let after = flow_for(&server).step(state, Choice::Retry).await;
        answers.assert_async().await;
        assert_eq!(after.answered(), 1);
        assert!(after.is_complete());
    }
}
