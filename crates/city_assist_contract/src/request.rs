//! 网关各端点的请求结构

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// POST /chat/ask
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub question: String,
}

/// POST /eco/tips
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EcoTipRequest {
    pub topic: String,
}

/// POST /feedback/submit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    pub name: String,
    pub message: String,
}

/// POST /policy/summarize
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolicyTextRequest {
    pub text: String,
}

/// GET 类端点共用的 `?city=` 查询参数
#[derive(Debug, Clone, Serialize, Deserialize, IntoParams)]
pub struct CityQuery {
    pub city: String,
}
