//! 各端点处理器
//!
//! 每个端点都是一次性的转发或本地推导：校验入参形状、至多一次
//! 上游调用、重整 JSON 后返回。上游非成功状态转成软错误文案
//! （与旧版逐字一致），传输层/解析失败统一取错误的显示串。

use std::sync::Arc;

use axum::extract::{Extension, Json, Query};
use chrono::Local;
use rand::thread_rng;
use tracing::{info, warn};

use city_assist_contract::{
    AnomalyReport, ChatAnswer, ChatRequest, CityQuery, EcoTip, EcoTipRequest, FeedbackAck, FeedbackRequest,
    KpiForecast, PolicySummary, PolicyTextRequest, SustainabilityReport, WeatherSnapshot,
};

use crate::api::wrapper::ApiResponse;
use crate::api::AppState;
use crate::mock;
use crate::providers::ProviderError;
use crate::utils::text::title_case;

/// 生成类端点的上游错误文案
fn upstream_error(label: &str, status: u16, body: &str) -> String {
    format!("{} API Error: {}. Response: {}", label, status, body)
}

/// 天气端点的上游错误文案（历史契约用的是连字符分隔）
fn weather_upstream_error(status: u16, body: &str) -> String {
    format!("Weather API Error: {} - {}", status, body)
}

/// KPI 推导公式：用水量、用电量都是温湿度的固定线性函数
fn estimate_kpi(temp: f64, humidity: f64) -> (i64, i64) {
    let estimated_water = (75000.0 + temp * 500.0).round() as i64;
    let estimated_energy = (10000.0 + humidity * 50.0).round() as i64;
    (estimated_water, estimated_energy)
}

/// 智能问答
#[utoipa::path(
    post,
    path = "/chat/ask",
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatAnswer),
    )
)]
pub async fn ask_chat(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> ApiResponse<ChatAnswer> {
    match state
        .inference
        .generate(&state.config.chat_model_url, &request.question)
        .await
    {
        Ok(answer) => ApiResponse::ok(ChatAnswer { answer }),
        Err(ProviderError::Upstream { status, body }) => {
            warn!("问答模型返回非成功状态: {}", status);
            ApiResponse::error(upstream_error("Chat", status, &body))
        }
        Err(e) => {
            warn!("问答请求失败: {}", e);
            ApiResponse::error(e.to_string())
        }
    }
}

/// 环保贴士生成
#[utoipa::path(
    post,
    path = "/eco/tips",
    request_body = EcoTipRequest,
    responses(
        (status = 200, body = EcoTip),
    )
)]
pub async fn generate_eco_tip(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<EcoTipRequest>,
) -> ApiResponse<EcoTip> {
    let prompt = format!("Give me one short eco-friendly tip about {}.", request.topic);
    match state.inference.generate(&state.config.ecotip_model_url, &prompt).await {
        Ok(tip) => ApiResponse::ok(EcoTip { tip }),
        Err(ProviderError::Upstream { status, body }) => {
            warn!("环保贴士模型返回非成功状态: {}", status);
            ApiResponse::error(upstream_error("Eco Tip", status, &body))
        }
        Err(e) => {
            warn!("环保贴士请求失败: {}", e);
            ApiResponse::error(e.to_string())
        }
    }
}

/// 市民反馈：只记日志，不落库，永远返回固定确认
#[utoipa::path(
    post,
    path = "/feedback/submit",
    request_body = FeedbackRequest,
    responses(
        (status = 200, body = FeedbackAck),
    )
)]
pub async fn submit_feedback(Json(feedback): Json<FeedbackRequest>) -> ApiResponse<FeedbackAck> {
    info!("收到市民反馈 - {}: {}", feedback.name, feedback.message);
    ApiResponse::ok(FeedbackAck::received())
}

/// 政策摘要
#[utoipa::path(
    post,
    path = "/policy/summarize",
    request_body = PolicyTextRequest,
    responses(
        (status = 200, body = PolicySummary),
    )
)]
pub async fn summarize_policy(
    Extension(state): Extension<Arc<AppState>>,
    Json(request): Json<PolicyTextRequest>,
) -> ApiResponse<PolicySummary> {
    match state
        .inference
        .summarize(&state.config.policy_summary_model_url, &request.text)
        .await
    {
        Ok(summary) => ApiResponse::ok(PolicySummary { summary }),
        Err(ProviderError::Upstream { status, body }) => {
            warn!("摘要模型返回非成功状态: {}", status);
            ApiResponse::error(upstream_error("Policy Summarizer", status, &body))
        }
        Err(e) => {
            warn!("摘要请求失败: {}", e);
            ApiResponse::error(e.to_string())
        }
    }
}

/// 当前天气查询
#[utoipa::path(
    get,
    path = "/weather/get",
    params(CityQuery),
    responses(
        (status = 200, body = WeatherSnapshot),
    )
)]
pub async fn get_weather(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CityQuery>,
) -> ApiResponse<WeatherSnapshot> {
    match state.weather.current(&params.city).await {
        Ok(current) => ApiResponse::ok(WeatherSnapshot {
            temperature: format!("{}°C", current.temp),
            humidity: format!("{}%", current.humidity),
            weather: title_case(&current.description),
        }),
        Err(ProviderError::Upstream { status, body }) => {
            warn!("天气服务返回非成功状态: {}", status);
            ApiResponse::error(weather_upstream_error(status, &body))
        }
        Err(e) => {
            warn!("天气查询失败: {}", e);
            ApiResponse::error(e.to_string())
        }
    }
}

/// KPI 预测：取预报首条的温湿度，套固定线性公式
#[utoipa::path(
    get,
    path = "/kpi/forecast",
    params(CityQuery),
    responses(
        (status = 200, body = KpiForecast),
    )
)]
pub async fn kpi_forecast(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<CityQuery>,
) -> ApiResponse<KpiForecast> {
    match state.weather.forecast_first(&params.city).await {
        Ok(entry) => {
            let (estimated_water, estimated_energy) = estimate_kpi(entry.temp, entry.humidity);
            ApiResponse::ok(KpiForecast {
                temperature: entry.temp_raw,
                humidity: entry.humidity_raw,
                estimated_water,
                estimated_energy,
            })
        }
        Err(e) => {
            warn!("KPI 预测失败: {}", e);
            ApiResponse::error(e.to_string())
        }
    }
}

/// 可持续发展报告：纯随机生成，无上游调用
#[utoipa::path(
    get,
    path = "/sustainability/report",
    params(CityQuery),
    responses(
        (status = 200, body = SustainabilityReport),
    )
)]
pub async fn get_sustainability_report(Query(params): Query<CityQuery>) -> ApiResponse<SustainabilityReport> {
    ApiResponse::ok(mock::sustainability_report(&mut thread_rng(), &params.city))
}

/// 异常检测：纯随机生成，今天起往前三天各一条
#[utoipa::path(
    get,
    path = "/anomaly/check",
    params(CityQuery),
    responses(
        (status = 200, body = AnomalyReport),
    )
)]
pub async fn anomaly_check(Query(params): Query<CityQuery>) -> ApiResponse<AnomalyReport> {
    let today = Local::now().date_naive();
    ApiResponse::ok(mock::anomaly_report(&mut thread_rng(), &params.city, today))
}
