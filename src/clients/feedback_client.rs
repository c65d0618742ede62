/// 反馈 API 客户端
///
/// 封装所有与反馈 API 相关的调用逻辑
use crate::config::Config;
use crate::error::{ApiError, AppResult};
use crate::infrastructure::HttpExecutor;
use crate::models::export::{ExportFormat, ExportRow};
use crate::models::session::{
    AnswerRequest, FeedbackStartResponse, HealthResponse, SessionRef, StartSessionRequest,
    StartSessionResponse,
};
use crate::models::{Answer, Question, SessionId};
use tracing::debug;

const SESSION_START: &str = "session/start";
const SESSION_END: &str = "session/end";
const FEEDBACK_START: &str = "feedback/start";
const FEEDBACK_ANSWER: &str = "feedback/answer";
const HEALTHZ: &str = "healthz";

/// 反馈 API 客户端
#[derive(Clone)]
pub struct FeedbackClient {
    executor: HttpExecutor,
}

impl FeedbackClient {
    /// 创建新的反馈客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let executor = HttpExecutor::new(
            &config.api_base_url,
            &config.user_agent,
            config.request_timeout(),
        )?;
        Ok(Self { executor })
    }

    /// 创建新会话
    pub async fn start_session(
        &self,
        request: &StartSessionRequest,
    ) -> AppResult<StartSessionResponse> {
        debug!(
            "创建会话: consented={}, research_version={}",
            request.consented, request.research_version
        );
        self.executor.post_json(SESSION_START, request).await
    }

    /// 获取题目列表
    pub async fn start_feedback(&self, session_id: &SessionId) -> AppResult<Vec<Question>> {
        let response: FeedbackStartResponse = self
            .executor
            .post_json(
                FEEDBACK_START,
                &SessionRef {
                    session_id: session_id.as_str(),
                },
            )
            .await?;
        Ok(response.questions)
    }

    /// 提交单题答案（响应体不使用）
    pub async fn submit_answer(&self, session_id: &SessionId, answer: &Answer) -> AppResult<()> {
        self.executor
            .post_json_unit(FEEDBACK_ANSWER, &AnswerRequest::new(session_id, answer))
            .await
    }

    /// 通知服务端会话结束
    pub async fn end_session(&self, session_id: &SessionId) -> AppResult<()> {
        self.executor
            .post_json_unit(
                SESSION_END,
                &SessionRef {
                    session_id: session_id.as_str(),
                },
            )
            .await
    }

    /// 健康检查
    pub async fn health(&self) -> AppResult<()> {
        let response: HealthResponse = self.executor.get_json(HEALTHZ).await?;
        if response.ok {
            Ok(())
        } else {
            Err(ApiError::Unhealthy {
                endpoint: HEALTHZ.to_string(),
            }
            .into())
        }
    }

    /// 下载 CSV 导出（原样字节，保留 BOM）
    pub async fn export_csv(&self) -> AppResult<Vec<u8>> {
        self.executor.get_bytes(ExportFormat::Csv.endpoint()).await
    }

    /// 下载 JSON 导出
    pub async fn export_json(&self) -> AppResult<Vec<ExportRow>> {
        self.executor.get_json(ExportFormat::Json.endpoint()).await
    }

    /// CSV 导出链接
    pub fn export_csv_url(&self) -> String {
        self.executor.url(ExportFormat::Csv.endpoint())
    }
}
