//! 问卷运行器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次问卷会话的完整流程和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：日志文件、HTTP 客户端、各项服务
//! 2. **会话建立**：复用地址中的会话，或创建新会话并改写地址
//! 3. **题目加载**：拉取题目列表，位置归零
//! 4. **作答循环**：render → 读取选择 → 提交 → 新状态
//! 5. **完成页**：显示导出链接并输出统计
//!
//! 会话结束通知（`end_session`）和导出下载（`export`）是独立入口，
//! 作答流程本身不会调用它们。

use crate::clients::FeedbackClient;
use crate::config::Config;
use crate::error::SurveyError;
use crate::infrastructure::PageAddress;
use crate::models::{ExportFormat, SessionId};
use crate::services::{
    AnswerService, ExportReport, ExportService, QuestionService, ResumeWriter, SessionService,
};
use crate::ui::TerminalUi;
use crate::utils::logging;
use crate::workflow::{render, Choice, SurveyFlow, SurveyState, View};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub session_id: SessionId,
    /// 运行结束时的页面地址（含 session_id）
    pub address: PageAddress,
    pub total: usize,
    pub answered: usize,
    pub skipped: usize,
    /// 是否走到了完成页（中途退出为 false）
    pub completed: bool,
}

/// 问卷运行器
pub struct SurveyRunner {
    config: Config,
    address: PageAddress,
    export_url: String,
    session_service: SessionService,
    question_service: QuestionService,
    export_service: ExportService,
    flow: SurveyFlow,
    resume_writer: Option<ResumeWriter>,
}

impl SurveyRunner {
    /// 初始化应用
    ///
    /// 不触碰日志文件：`end` 和 `export` 也走这里，不能清掉上一次运行的记录。
    pub fn initialize(config: Config, address: PageAddress) -> Result<Self> {
        logging::log_startup(&config);

        let client = FeedbackClient::new(&config).context("无法创建反馈 API 客户端")?;

        Ok(Self {
            export_url: client.export_csv_url(),
            session_service: SessionService::new(client.clone(), &config),
            question_service: QuestionService::new(client.clone()),
            export_service: ExportService::new(client.clone()),
            flow: SurveyFlow::new(AnswerService::new(client), &config),
            resume_writer: config.resume_file.as_deref().map(ResumeWriter::with_path),
            address,
            config,
        })
    }

    /// 当前页面地址
    pub fn address(&self) -> &PageAddress {
        &self.address
    }

    /// 运行问卷主流程
    pub async fn run<R: BufRead, W: Write>(&mut self, ui: &mut TerminalUi<R, W>) -> Result<RunSummary> {
        if let Some(log_file) = &self.config.output_log_file {
            logging::init_log_file(log_file)?;
        }

        if self.config.check_health {
            self.session_service
                .check_health()
                .await
                .context("反馈服务不可用")?;
        }

        let init = self
            .session_service
            .initialize(&self.address)
            .await
            .context("无法建立会话")?;

        if init.created {
            self.update_address(init.address).await;
        }

        let questions = self
            .question_service
            .load(&init.session_id)
            .await
            .context("无法加载题目")?;

        let mut state = SurveyState::new(init.session_id, questions);

        let completed = loop {
            let view = render(&state, &self.export_url);
            ui.draw(&view)?;

            if matches!(view, View::Completion { .. }) {
                break true;
            }

            let choice = ui.read_choice(&view)?;
            if choice == Choice::Quit {
                warn!(
                    "[会话 {}] ⚠️ 输入结束，问卷停在第 {}/{} 题",
                    state.session_id(),
                    state.position() + 1,
                    state.questions().len()
                );
                break false;
            }

            state = self.flow.step(state, choice).await;
        };

        let summary = RunSummary {
            session_id: state.session_id().clone(),
            address: self.address.clone(),
            total: state.questions().len(),
            answered: state.answered(),
            skipped: state.skipped(),
            completed,
        };

        self.finish(&summary);
        Ok(summary)
    }

    /// 通知服务端会话结束
    ///
    /// 供外部在跳转回来之后调用；会话ID取自当前地址。
    pub async fn end_session(&self) -> Result<()> {
        let session_id =
            self.address
                .session_id()
                .ok_or_else(|| SurveyError::MissingSessionId {
                    address: self.address.to_string(),
                })?;

        self.session_service
            .end(&session_id)
            .await
            .with_context(|| format!("无法结束会话: {}", session_id))
    }

    /// 下载导出数据到本地文件
    pub async fn export(&self, format: ExportFormat, output: &Path) -> Result<ExportReport> {
        self.export_service
            .download(format, output)
            .await
            .with_context(|| format!("导出失败: {}", output.display()))
    }

    /// 新会话创建后改写地址，不重新加载任何内容
    ///
    /// 会话已在服务端创建，恢复文件写入失败只记警告。
    async fn update_address(&mut self, address: PageAddress) {
        self.address = address;
        info!("🔗 页面地址已更新: {}", self.address);

        if let Some(writer) = &self.resume_writer {
            match writer.write(&self.address).await {
                Ok(()) => info!("✓ 恢复链接已写入: {}", writer.path()),
                Err(e) => warn!("⚠️ 写入恢复链接失败 ({}): {}", writer.path(), e),
            }
        }
    }

    fn finish(&self, summary: &RunSummary) {
        logging::print_final_stats(
            summary.session_id.as_str(),
            summary.answered,
            summary.skipped,
            summary.total,
        );

        if let Some(log_file) = &self.config.output_log_file {
            let line = format!(
                "会话 {} | 已提交 {}/{} | 跳过 {} | {} | {}",
                summary.session_id,
                summary.answered,
                summary.total,
                summary.skipped,
                if summary.completed { "已完成" } else { "未完成" },
                summary.address
            );
            if let Err(e) = logging::append_log_line(log_file, &line) {
                warn!("⚠️ 写入日志文件失败: {}", e);
            }
        }
    }
}
