//! # Feedback Survey
//!
//! 一个在终端里完成反馈问卷的 Rust 客户端
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源，只暴露能力
//! - `HttpExecutor` - 唯一的 HTTP Client 持有者
//! - `PageAddress` - 携带 session_id 的页面地址
//!
//! ### ② 接口层（Clients）
//! - `FeedbackClient` - 反馈 API 的各个端点
//!
//! ### ③ 业务能力层（Services）
//! - `SessionService` - 获取/创建/结束会话
//! - `QuestionService` - 加载题目列表
//! - `AnswerService` - 提交单题答案
//! - `ExportService` / `ResumeWriter` - 写本地文件
//!
//! ### ④ 流程层（Workflow）
//! - `SurveyState` - 不可变状态，事件驱动的纯转换
//! - `render` - 状态 → 视图的纯函数
//! - `SurveyFlow` - 选择 → 提交 → 新状态
//!
//! ### ⑤ 编排层（Orchestration）
//! - `SurveyRunner` - 一次会话的完整流程
//!
//! 终端渲染适配器位于 `ui/`。

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{HttpExecutor, PageAddress};
pub use models::{Answer, Question, SessionId};
pub use orchestrator::{RunSummary, SurveyRunner};
pub use workflow::{render, Choice, SurveyFlow, SurveyState, View};
