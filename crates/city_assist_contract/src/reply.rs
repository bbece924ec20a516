//! 软错误契约
//!
//! 网关对上游失败不返回 5xx，而是在 200 响应体里带一个 `error` 字段，
//! 调用方必须检查响应体来区分成功与失败。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 软错误响应体 `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SoftError {
    pub error: String,
}

/// 端点响应：要么是成功载荷，要么是软错误
///
/// untagged 反序列化先尝试成功载荷，失败再按软错误解析；
/// 两种形状字段不相交，所以顺序不影响结果。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Ok(T),
    Err(SoftError),
}

impl<T> Reply<T> {
    pub fn ok(data: T) -> Self {
        Reply::Ok(data)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Reply::Err(SoftError { error: message.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::EcoTip;

    #[test]
    fn test_reply_decodes_success_payload() {
        let reply: Reply<EcoTip> = serde_json::from_str(r#"{"tip":"Reuse your bags."}"#).unwrap();
        match reply {
            Reply::Ok(tip) => assert_eq!(tip.tip, "Reuse your bags."),
            Reply::Err(_) => panic!("应解析为成功载荷"),
        }
    }

    #[test]
    fn test_reply_decodes_soft_error() {
        let reply: Reply<EcoTip> = serde_json::from_str(r#"{"error":"Eco Tip API Error: 503. Response: busy"}"#).unwrap();
        match reply {
            Reply::Err(soft) => assert!(soft.error.starts_with("Eco Tip API Error: 503")),
            Reply::Ok(_) => panic!("应解析为软错误"),
        }
    }

    #[test]
    fn test_reply_serializes_flat() {
        let value = serde_json::to_value(Reply::<EcoTip>::error("boom")).unwrap();
        assert_eq!(value, serde_json::json!({"error": "boom"}));
    }
}
