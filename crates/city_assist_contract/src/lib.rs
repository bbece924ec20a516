//! 网关对外 HTTP 契约的共享类型
//!
//! 网关和仪表盘都依赖这里的请求/响应结构，保证两端对
//! 字段名（含带空格的展示键名）的理解一致。所有类型都是
//! 单次请求/响应内的临时数据，不做任何持久化。

pub mod anomaly;
pub mod reply;
pub mod request;
pub mod response;

pub use anomaly::{AnomalyRecord, AnomalyType, Severity};
pub use reply::{Reply, SoftError};
pub use request::{ChatRequest, CityQuery, EcoTipRequest, FeedbackRequest, PolicyTextRequest};
pub use response::{
    AnomalyReport, ChatAnswer, EcoTip, FeedbackAck, KpiForecast, PolicySummary, SustainabilityReport, WeatherSnapshot,
};
