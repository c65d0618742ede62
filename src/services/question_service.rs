/// 题目加载服务
///
/// 负责为会话拉取题目列表，并做基本校验
use crate::clients::FeedbackClient;
use crate::error::AppResult;
use crate::models::{validate_question_list, Question, SessionId};
use crate::utils::logging::truncate_text;
use tracing::{debug, info, warn};

pub struct QuestionService {
    client: FeedbackClient,
}

impl QuestionService {
    pub fn new(client: FeedbackClient) -> Self {
        Self { client }
    }

    /// 拉取题目列表（不分页、不缓存）
    pub async fn load(&self, session_id: &SessionId) -> AppResult<Vec<Question>> {
        info!("[会话 {}] 📋 正在加载题目...", session_id);

        let questions = self.client.start_feedback(session_id).await?;
        validate_question_list(&questions)?;

        if questions.is_empty() {
            warn!("[会话 {}] ⚠️ 服务端没有下发任何题目", session_id);
        }
        for (i, q) in questions.iter().enumerate() {
            debug!(
                "[会话 {}]   {}. {} ({:?}) {}",
                session_id,
                i + 1,
                q.key,
                q.kind,
                truncate_text(&q.label, 40)
            );
        }

        info!("[会话 {}] ✓ 共 {} 道题目", session_id, questions.len());
        Ok(questions)
    }
}
