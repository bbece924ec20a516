//! 网关 HTTP 层：路由、共享状态与 OpenAPI 文档

pub mod handler;
pub mod wrapper;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use crate::providers::inference::InferenceClient;
use crate::providers::weather::WeatherClient;
use crate::providers::{build_http_client, ProviderError};

/// 网关共享状态：配置与上游客户端
///
/// 除了连接池之外没有任何跨请求状态，各请求互不影响。
pub struct AppState {
    pub config: GatewayConfig,
    pub inference: InferenceClient,
    pub weather: WeatherClient,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Result<Self, ProviderError> {
        let client = build_http_client(config.upstream_timeout)?;
        let inference = InferenceClient::new(client.clone(), config.hf_api_key.clone());
        let weather = WeatherClient::new(
            client,
            config.weather_api_base.clone(),
            config.weather_api_key.clone(),
        );
        Ok(Self {
            config,
            inference,
            weather,
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handler::ask_chat,
        handler::generate_eco_tip,
        handler::submit_feedback,
        handler::summarize_policy,
        handler::get_weather,
        handler::kpi_forecast,
        handler::get_sustainability_report,
        handler::anomaly_check,
    ),
    components(schemas(
        city_assist_contract::ChatRequest,
        city_assist_contract::EcoTipRequest,
        city_assist_contract::FeedbackRequest,
        city_assist_contract::PolicyTextRequest,
        city_assist_contract::ChatAnswer,
        city_assist_contract::EcoTip,
        city_assist_contract::FeedbackAck,
        city_assist_contract::PolicySummary,
        city_assist_contract::WeatherSnapshot,
        city_assist_contract::KpiForecast,
        city_assist_contract::SustainabilityReport,
        city_assist_contract::AnomalyReport,
        city_assist_contract::AnomalyRecord,
        city_assist_contract::AnomalyType,
        city_assist_contract::Severity,
        city_assist_contract::SoftError,
    ))
)]
pub struct ApiDoc;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat/ask", post(handler::ask_chat))
        .route("/eco/tips", post(handler::generate_eco_tip))
        .route("/feedback/submit", post(handler::submit_feedback))
        .route("/policy/summarize", post(handler::summarize_policy))
        .route("/weather/get", get(handler::get_weather))
        .route("/kpi/forecast", get(handler::kpi_forecast))
        .route("/sustainability/report", get(handler::get_sustainability_report))
        .route("/anomaly/check", get(handler::anomaly_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
