use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// /feedback/export.json 的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub session_id: String,
    pub q_key: String,
    pub answer_numeric: Option<i64>,
    pub answer_text: Option<String>,
    pub ts: NaiveDateTime,
}

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// 服务端导出路径
    pub fn endpoint(self) -> &'static str {
        match self {
            ExportFormat::Csv => "feedback/export.csv",
            ExportFormat::Json => "feedback/export.json",
        }
    }
}
