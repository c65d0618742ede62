//! 恢复链接写入服务 - 业务能力层
//!
//! 只负责把带会话ID的地址写入文件，不关心流程

use crate::error::{AppError, AppResult};
use crate::infrastructure::PageAddress;
use tracing::debug;

/// 恢复链接写入服务
///
/// 每次写入覆盖旧内容，文件里始终只有最新的地址。
pub struct ResumeWriter {
    resume_file_path: String,
}

impl ResumeWriter {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            resume_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.resume_file_path
    }

    /// 写入地址
    pub async fn write(&self, address: &PageAddress) -> AppResult<()> {
        debug!("写入恢复链接: {} -> {}", address, self.resume_file_path);

        tokio::fs::write(&self.resume_file_path, format!("{}\n", address))
            .await
            .map_err(|e| AppError::file_write_failed(&self.resume_file_path, e))
    }
}
