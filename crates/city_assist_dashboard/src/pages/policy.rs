//! 政策摘要页面
//!
//! 正文可以用 `--text` 直接给，也可以从标准输入整段读取；
//! 摘要失败时按原文兜底展示网关响应。

use std::io::Read;

use crate::client::{ClientError, GatewayClient};

/// 获取待摘要正文：优先 `--text`，否则读完整个标准输入
pub fn resolve_text(arg: Option<String>) -> std::io::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

pub async fn run(client: &GatewayClient, text: &str) {
    if text.trim().is_empty() {
        println!("⚠️ 请提供政策正文（--text 或标准输入）。");
        return;
    }

    println!("📄 Policy Summarizer");
    match client.summarize_policy(text).await {
        Ok(result) => println!("✅ {}", result.summary),
        Err(ClientError::Soft(message)) => println!("❌ {}", message),
        Err(ClientError::Decode { raw }) => println!("{}", raw),
        Err(e) => println!("❌ Request failed: {}", e),
    }
}
