//! 网关客户端
//!
//! 仪表盘与网关之间的所有调用都经过这里。网关的软错误
//! （200 + `error` 字段）在解码阶段转成 [`ClientError::Soft`]，
//! 页面据此渲染内联警告；响应体完全解不开时保留原文，
//! 供对话/摘要页面做降级展示。

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use city_assist_contract::{
    AnomalyReport, ChatAnswer, ChatRequest, EcoTip, EcoTipRequest, FeedbackRequest, KpiForecast, PolicySummary,
    PolicyTextRequest, Reply, SustainabilityReport,
};

#[derive(Error, Debug)]
pub enum ClientError {
    /// 网关返回的软错误文案
    #[error("{0}")]
    Soft(String),
    /// 传输层失败
    #[error("请求网关失败: {0}")]
    Transport(#[from] reqwest::Error),
    /// 响应体不符合契约，保留原文
    #[error("无法解析网关响应: {raw}")]
    Decode { raw: String },
}

/// 解析网关响应体：成功载荷 / 软错误 / 原文兜底
fn parse_reply<T: DeserializeOwned>(text: &str) -> Result<T, ClientError> {
    match serde_json::from_str::<Reply<T>>(text) {
        Ok(Reply::Ok(payload)) => Ok(payload),
        Ok(Reply::Err(soft)) => Err(ClientError::Soft(soft.error)),
        Err(_) => Err(ClientError::Decode { raw: text.to_string() }),
    }
}

pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(Duration::from_secs(60)).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_city<T: DeserializeOwned>(&self, path: &str, city: &str) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {} city={}", url, city);
        let response = self.http.get(&url).query(&[("city", city)]).send().await?;
        let text = response.text().await?;
        parse_reply(&text)
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        let text = response.text().await?;
        parse_reply(&text)
    }

    pub async fn kpi_forecast(&self, city: &str) -> Result<KpiForecast, ClientError> {
        self.get_city("kpi/forecast", city).await
    }

    pub async fn anomaly_check(&self, city: &str) -> Result<AnomalyReport, ClientError> {
        self.get_city("anomaly/check", city).await
    }

    pub async fn sustainability_report(&self, city: &str) -> Result<SustainabilityReport, ClientError> {
        self.get_city("sustainability/report", city).await
    }

    pub async fn eco_tip(&self, topic: &str) -> Result<EcoTip, ClientError> {
        self.post_json(
            "eco/tips",
            &EcoTipRequest {
                topic: topic.to_string(),
            },
        )
        .await
    }

    pub async fn ask(&self, question: &str) -> Result<ChatAnswer, ClientError> {
        self.post_json(
            "chat/ask",
            &ChatRequest {
                question: question.to_string(),
            },
        )
        .await
    }

    pub async fn summarize_policy(&self, text: &str) -> Result<PolicySummary, ClientError> {
        self.post_json("policy/summarize", &PolicyTextRequest { text: text.to_string() })
            .await
    }

    /// 反馈页面只看传输层状态，软错误契约不适用
    pub async fn submit_feedback(&self, name: &str, message: &str) -> Result<StatusCode, reqwest::Error> {
        let url = format!("{}/feedback/submit", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&FeedbackRequest {
                name: name.to_string(),
                message: message.to_string(),
            })
            .send()
            .await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_reply_success() {
        let tip: EcoTip = parse_reply(r#"{"tip":"Compost kitchen waste."}"#).unwrap();
        assert_eq!(tip.tip, "Compost kitchen waste.");
    }

    #[test]
    fn test_parse_reply_soft_error() {
        let result = parse_reply::<EcoTip>(r#"{"error":"Eco Tip API Error: 503. Response: busy"}"#);
        assert_matches!(result, Err(ClientError::Soft(ref message)) if message.contains("503"));
    }

    #[test]
    fn test_parse_reply_keeps_raw_text_on_decode_failure() {
        let result = parse_reply::<ChatAnswer>("<html>gateway timeout</html>");
        assert_matches!(result, Err(ClientError::Decode { ref raw }) if raw == "<html>gateway timeout</html>");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GatewayClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
