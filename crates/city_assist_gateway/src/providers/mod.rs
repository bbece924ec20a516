//! 上游服务客户端
//!
//! 网关依赖三个外部 HTTP 服务：文本生成推理、文本摘要推理、天气服务。
//! 这里的客户端只负责单次转发，不做重试和缓存；上游失败以
//! [`ProviderError`] 形式向处理器层传递，由处理器决定软错误文案。

pub mod inference;
pub mod weather;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// 上游返回了非成功状态码，保留原始状态和响应体
    #[error("upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },
    /// 传输层失败（连接、超时等）
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// 上游响应形状不符合约定
    #[error("malformed upstream response: {0}")]
    Malformed(String),
}

/// 按网关配置构建 reqwest 客户端，统一超时
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, ProviderError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_keeps_status_and_body() {
        let err = ProviderError::Upstream {
            status: 503,
            body: "model loading".to_string(),
        };
        assert_eq!(err.to_string(), "upstream returned status 503: model loading");
    }
}
