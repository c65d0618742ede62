use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 反馈 API 根地址
    pub api_base_url: String,
    /// 初始页面地址（可带 session_id 用于恢复会话）
    pub page_url: String,
    /// 受访者是否已同意参与研究
    pub consented: bool,
    /// 协议版本标记
    pub research_version: String,
    /// 上报给服务端的客户端标识
    pub user_agent: String,
    /// 新会话创建后写入恢复链接的文件（可选）
    pub resume_file: Option<String>,
    /// 输出日志文件（可选）
    pub output_log_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 开始前是否检查 /healthz
    pub check_health: bool,
    /// 提交失败时是否仍然前进到下一题
    pub advance_on_submit_failure: bool,
    /// 请求超时秒数，不设置则不超时
    pub request_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            page_url: "http://localhost:8000/feedback".to_string(),
            consented: true,
            research_version: "v1".to_string(),
            user_agent: default_user_agent(),
            resume_file: None,
            output_log_file: None,
            verbose_logging: false,
            check_health: false,
            advance_on_submit_failure: false,
            request_timeout_secs: None,
        }
    }
}

impl Config {
    /// 从环境变量加载配置（未设置的项使用默认值）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// 从 TOML 文件加载配置，再用环境变量覆盖
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            })?;
        config.overlay(|key| std::env::var(key).ok())
    }

    /// 用 `lookup` 提供的变量覆盖当前配置
    pub fn overlay<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            api_base_url: lookup("SURVEY_API_BASE_URL").unwrap_or(self.api_base_url),
            page_url: lookup("SURVEY_PAGE_URL").unwrap_or(self.page_url),
            consented: parse_var(&lookup, "SURVEY_CONSENTED", "bool")?.unwrap_or(self.consented),
            research_version: lookup("SURVEY_RESEARCH_VERSION").unwrap_or(self.research_version),
            user_agent: lookup("SURVEY_USER_AGENT").unwrap_or(self.user_agent),
            resume_file: lookup("SURVEY_RESUME_FILE").or(self.resume_file),
            output_log_file: lookup("OUTPUT_LOG_FILE").or(self.output_log_file),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
            check_health: parse_var(&lookup, "SURVEY_CHECK_HEALTH", "bool")?
                .unwrap_or(self.check_health),
            advance_on_submit_failure: parse_var(&lookup, "SURVEY_ADVANCE_ON_SUBMIT_FAILURE", "bool")?
                .unwrap_or(self.advance_on_submit_failure),
            request_timeout_secs: parse_var(&lookup, "SURVEY_REQUEST_TIMEOUT_SECS", "u64")?
                .or(self.request_timeout_secs),
        })
    }

    /// 请求超时
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn default_user_agent() -> String {
    format!(
        "feedback_survey/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

fn parse_var<F, T>(lookup: &F, var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}
