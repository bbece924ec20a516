//! 推理服务客户端
//!
//! 文本生成和摘要走同一套推理接口：POST `{"inputs": ...}`，
//! 带 Bearer Key，响应是一个数组，取第一个元素的生成字段。
//! 两类模型的响应字段名不同（`generated_text` / `summary_text`），
//! 所以分成两个方法、两套响应结构。

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ProviderError;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Deserialize)]
struct SummaryText {
    summary_text: String,
}

/// 推理服务客户端，生成和摘要共用一个连接池
pub struct InferenceClient {
    client: Client,
    api_key: String,
}

impl InferenceClient {
    pub fn new(client: Client, api_key: String) -> Self {
        Self { client, api_key }
    }

    /// 调用文本生成模型，返回第一条生成文本
    pub async fn generate(&self, model_url: &str, prompt: &str) -> Result<String, ProviderError> {
        debug!("调用文本生成模型: {}", model_url);
        let body = self.forward(model_url, prompt).await?;
        let outputs: Vec<GeneratedText> =
            serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| ProviderError::Malformed("empty generation output".to_string()))
    }

    /// 调用摘要模型，返回第一条摘要文本
    pub async fn summarize(&self, model_url: &str, text: &str) -> Result<String, ProviderError> {
        debug!("调用摘要模型: {}", model_url);
        let body = self.forward(model_url, text).await?;
        let outputs: Vec<SummaryText> = serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| ProviderError::Malformed("empty summary output".to_string()))
    }

    /// 单次转发：成功时返回原始响应体，非成功状态整体上抛
    async fn forward(&self, model_url: &str, inputs: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(model_url)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest { inputs })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
