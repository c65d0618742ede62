//! 答案提交服务 - 业务能力层
//!
//! 只负责"提交一道题的答案"，是否前进由流程层决定

use crate::clients::FeedbackClient;
use crate::error::AppResult;
use crate::models::{Answer, SessionId};
use tracing::{info, warn};

pub struct AnswerService {
    client: FeedbackClient,
}

impl AnswerService {
    pub fn new(client: FeedbackClient) -> Self {
        Self { client }
    }

    /// 提交答案，返回明确的成功/失败
    pub async fn submit(&self, session_id: &SessionId, answer: &Answer) -> AppResult<()> {
        info!("[会话 {}] 📤 提交答案: {}", session_id, answer);

        match self.client.submit_answer(session_id, answer).await {
            Ok(()) => {
                info!("[会话 {}] ✓ 答案提交成功", session_id);
                Ok(())
            }
            Err(e) => {
                warn!("[会话 {}] ⚠️ 答案提交失败: {}", session_id, e);
                Err(e)
            }
        }
    }
}
