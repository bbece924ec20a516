//! 响应包装
//!
//! 网关的错误契约是"软错误"：上游失败不改变自身的 HTTP 状态，
//! 统一回 200，载荷要么是成功结构、要么是 `{"error": "..."}`。
//! 客户端输入不合法（JSON 解析失败、缺 query 参数）仍走 axum
//! 默认的拒绝路径，不在这里处理。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use city_assist_contract::Reply;

/// 端点统一响应类型，总是以 200 返回
pub struct ApiResponse<T>(pub Reply<T>);

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self(Reply::ok(data))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self(Reply::error(message))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use city_assist_contract::ChatAnswer;

    #[test]
    fn test_ok_serializes_payload_flat() {
        let response = ApiResponse::ok(ChatAnswer {
            answer: "42".to_string(),
        });
        let value = serde_json::to_value(&response.0).unwrap();
        assert_eq!(value, serde_json::json!({"answer": "42"}));
    }

    #[test]
    fn test_error_serializes_error_key() {
        let response = ApiResponse::<ChatAnswer>::error("Chat API Error: 500. Response: oops");
        let value = serde_json::to_value(&response.0).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Chat API Error: 500. Response: oops"}));
    }

    #[test]
    fn test_soft_error_response_stays_http_200() {
        // 软错误不改变网关自身的传输状态
        let response = ApiResponse::<ChatAnswer>::error("upstream exploded").into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = ApiResponse::ok(ChatAnswer {
            answer: "ok".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
