//! 会话服务 - 业务能力层
//!
//! 负责"拿到会话ID"与"结束会话"，不关心题目流程

use crate::clients::FeedbackClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageAddress;
use crate::models::session::StartSessionRequest;
use crate::models::SessionId;
use tracing::info;

/// 会话初始化结果
#[derive(Debug, Clone)]
pub struct SessionInit {
    pub session_id: SessionId,
    /// 携带会话ID的页面地址
    pub address: PageAddress,
    /// 是否新建了会话（复用时为 false）
    pub created: bool,
}

/// 会话服务
pub struct SessionService {
    client: FeedbackClient,
    consented: bool,
    research_version: String,
    user_agent: String,
}

impl SessionService {
    pub fn new(client: FeedbackClient, config: &Config) -> Self {
        Self {
            client,
            consented: config.consented,
            research_version: config.research_version.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// 获取或创建会话
    ///
    /// 地址中已有 session_id 时原样复用，不发请求；否则向服务端申请新会话，
    /// 并返回写入了新ID的地址。
    pub async fn initialize(&self, address: &PageAddress) -> AppResult<SessionInit> {
        if let Some(session_id) = address.session_id() {
            info!("🔗 复用地址中的会话: {}", session_id);
            return Ok(SessionInit {
                session_id,
                address: address.clone(),
                created: false,
            });
        }

        info!("🆕 地址中没有会话，正在创建新会话...");
        let request = StartSessionRequest {
            consented: self.consented,
            research_version: self.research_version.clone(),
            user_agent: self.user_agent.clone(),
        };
        let response = self.client.start_session(&request).await?;
        let session_id = SessionId::new(response.session_id)?;
        let address = address.with_session_id(&session_id);

        info!("✓ 会话已创建: {}", session_id);
        Ok(SessionInit {
            session_id,
            address,
            created: true,
        })
    }

    /// 通知服务端会话结束
    pub async fn end(&self, session_id: &SessionId) -> AppResult<()> {
        info!("[会话 {}] 📤 正在结束会话...", session_id);
        self.client.end_session(session_id).await?;
        info!("[会话 {}] ✓ 会话已结束", session_id);
        Ok(())
    }

    /// 检查服务是否可用
    pub async fn check_health(&self) -> AppResult<()> {
        self.client.health().await?;
        info!("✓ 反馈服务健康检查通过");
        Ok(())
    }
}
