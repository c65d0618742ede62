//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次问卷会话的调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! survey_runner (会话 → 题目列表 → 作答循环 → 完成页)
//!     ↓
//! workflow::SurveyFlow + SurveyState (单次选择 → 新状态)
//!     ↓
//! services (能力层：session / question / answer / export)
//!     ↓
//! clients::FeedbackClient (接口报文)
//!     ↓
//! infrastructure (基础设施：HttpExecutor, PageAddress)
//! ```
//!
//! ## 设计原则
//!
//! 1. **资源隔离**：只有编排层持有 Config 与页面地址
//! 2. **向下依赖**：编排层 → workflow → services → clients → infrastructure
//! 3. **无业务逻辑**：只做调度和统计，状态转换在 workflow 中完成

pub mod survey_runner;

pub use survey_runner::{RunSummary, SurveyRunner};
