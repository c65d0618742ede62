use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 问卷业务错误
    #[error("问卷错误: {0}")]
    Survey(#[from] SurveyError),
    /// 终端读写错误
    #[error("终端读写失败: {0}")]
    Terminal(#[from] std::io::Error),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 客户端构建失败
    #[error("HTTP客户端构建失败: {source}")]
    ClientBuildFailed {
        #[source]
        source: reqwest::Error,
    },
    /// 网络请求失败（连接、超时等）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回非 2xx 状态码
    #[error("API返回错误响应 ({endpoint}): status={status}, body={body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应 JSON 解析失败
    #[error("JSON解析失败 ({endpoint}): {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
    /// 健康检查返回 ok=false
    #[error("服务健康检查未通过: {endpoint}")]
    Unhealthy { endpoint: String },
}

impl ApiError {
    /// 该错误是否值得用户手动重试
    ///
    /// 网络层失败和 5xx 视为暂时性错误；4xx 与解析失败重试也不会成功。
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::RequestFailed { .. } => true,
            ApiError::BadStatus { status, .. } => *status >= 500,
            ApiError::ClientBuildFailed { .. }
            | ApiError::Decode { .. }
            | ApiError::Unhealthy { .. } => false,
        }
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件 TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 问卷业务错误
#[derive(Debug, Error)]
pub enum SurveyError {
    /// 题目列表中出现重复的 key
    #[error("题目 key 重复: {key}")]
    DuplicateQuestionKey { key: String },
    /// 服务端返回了空的会话ID
    #[error("会话ID不能为空")]
    EmptySessionId,
    /// 页面地址中没有会话ID
    #[error("页面地址中没有 session_id: {address}")]
    MissingSessionId { address: String },
    /// 页面地址无法解析
    #[error("无法解析页面地址 '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 该错误是否可以由用户重试解决
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Api(e) => e.is_retryable(),
            _ => false,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
