//! 导出服务 - 业务能力层
//!
//! 把服务端的导出结果保存到本地文件

use crate::clients::FeedbackClient;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::ExportFormat;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub bytes_written: usize,
    /// JSON 导出的行数（CSV 不解析，为 None）
    pub rows: Option<usize>,
}

pub struct ExportService {
    client: FeedbackClient,
}

impl ExportService {
    pub fn new(client: FeedbackClient) -> Self {
        Self { client }
    }

    /// 下载导出文件并写入 `output`
    pub async fn download(&self, format: ExportFormat, output: &Path) -> AppResult<ExportReport> {
        info!("📥 正在下载导出数据 ({:?})...", format);

        let (content, rows) = match format {
            ExportFormat::Csv => (self.client.export_csv().await?, None),
            ExportFormat::Json => {
                let rows = self.client.export_json().await?;
                let content = serde_json::to_vec_pretty(&rows).map_err(|source| {
                    ApiError::Decode {
                        endpoint: format.endpoint().to_string(),
                        source,
                    }
                })?;
                (content, Some(rows.len()))
            }
        };

        fs::write(output, &content)
            .await
            .map_err(|e| AppError::file_write_failed(output.display().to_string(), e))?;

        info!(
            "✓ 导出完成: {} ({} 字节)",
            output.display(),
            content.len()
        );
        Ok(ExportReport {
            format,
            bytes_written: content.len(),
            rows,
        })
    }
}
