//! HTTP 执行器 - 基础设施层
//!
//! 持有唯一的 reqwest Client，只暴露"发请求"的能力

use crate::error::{ApiError, AppError, AppResult};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// HTTP 执行器
///
/// 职责：
/// - 持有 Client 与 API 根地址
/// - 统一处理状态码与 JSON 解析
/// - 不认识 Question / Answer
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
    base_url: String,
}

impl HttpExecutor {
    /// 创建新的 HTTP 执行器
    ///
    /// `timeout` 为 `None` 时请求不会超时。
    pub fn new(base_url: &str, user_agent: &str, timeout: Option<Duration>) -> AppResult<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ApiError::ClientBuildFailed { source })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 拼接完整 URL
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// POST JSON 并解析响应
    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .send(endpoint, self.client.post(self.url(endpoint)).json(body))
            .await?;
        decode(endpoint, response).await
    }

    /// POST JSON，只关心是否成功
    pub async fn post_json_unit<B>(&self, endpoint: &str, body: &B) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(endpoint, self.client.post(self.url(endpoint)).json(body))
            .await?;
        Ok(())
    }

    /// GET 并解析 JSON
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> AppResult<T> {
        let response = self
            .send(endpoint, self.client.get(self.url(endpoint)))
            .await?;
        decode(endpoint, response).await
    }

    /// GET 原始字节
    pub async fn get_bytes(&self, endpoint: &str) -> AppResult<Vec<u8>> {
        let response = self
            .send(endpoint, self.client.get(self.url(endpoint)))
            .await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, endpoint: &str, request: RequestBuilder) -> AppResult<Response> {
        debug!("请求 {}", self.url(endpoint));

        let response = request
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        debug!("{} 返回 {}", endpoint, status);
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> AppResult<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| AppError::api_request_failed(endpoint, e))?;
    serde_json::from_slice(&bytes).map_err(|source| {
        ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
        .into()
    })
}
