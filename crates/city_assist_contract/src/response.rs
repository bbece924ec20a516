//! 网关各端点的成功响应结构
//!
//! 旧版契约里部分键名带空格和单位（如 `Estimated Water Usage (Liters)`），
//! 这里统一用 `serde(rename)` 固定住，内部字段名保持 Rust 风格。

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::anomaly::AnomalyRecord;

/// POST /chat/ask 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatAnswer {
    pub answer: String,
}

/// POST /eco/tips 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EcoTip {
    pub tip: String,
}

/// POST /feedback/submit 固定确认响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackAck {
    pub status: String,
}

impl FeedbackAck {
    /// 反馈端点永远返回这个固定文案
    pub fn received() -> Self {
        Self {
            status: "Feedback received successfully".to_string(),
        }
    }
}

/// POST /policy/summarize 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PolicySummary {
    pub summary: String,
}

/// GET /weather/get 成功响应，三个字段都是格式化后的字符串
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherSnapshot {
    #[serde(rename = "Temperature")]
    pub temperature: String,
    #[serde(rename = "Humidity")]
    pub humidity: String,
    #[serde(rename = "Weather")]
    pub weather: String,
}

/// GET /kpi/forecast 成功响应
///
/// 温湿度原样回显上游的 JSON 数值字面量（整数不会变成 `18.0`），
/// 所以用 [`serde_json::Number`] 而不是 `f64`。
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KpiForecast {
    #[serde(rename = "Forecast Temperature (°C)")]
    #[schema(value_type = f64)]
    pub temperature: serde_json::Number,
    #[serde(rename = "Forecast Humidity (%)")]
    #[schema(value_type = f64)]
    pub humidity: serde_json::Number,
    #[serde(rename = "Estimated Water Usage (Liters)")]
    pub estimated_water: i64,
    #[serde(rename = "Estimated Energy Consumption (kWh)")]
    pub estimated_energy: i64,
}

/// GET /sustainability/report 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SustainabilityReport {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Carbon Emissions")]
    pub carbon_emissions: String,
    #[serde(rename = "Recycling Rate")]
    pub recycling_rate: String,
    #[serde(rename = "Green Spaces")]
    pub green_spaces: String,
    #[serde(rename = "EV Charging Stations")]
    pub ev_stations: u32,
}

/// GET /anomaly/check 成功响应
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnomalyReport {
    pub city: String,
    pub anomalies: Vec<AnomalyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_forecast_display_keys() {
        let forecast = KpiForecast {
            temperature: serde_json::Number::from_f64(18.5).unwrap(),
            humidity: serde_json::Number::from(60u32),
            estimated_water: 84250,
            estimated_energy: 13000,
        };
        let value = serde_json::to_value(&forecast).unwrap();
        assert_eq!(value["Forecast Temperature (°C)"], 18.5);
        assert_eq!(value["Forecast Humidity (%)"], 60);
        assert_eq!(value["Estimated Water Usage (Liters)"], 84250);
        assert_eq!(value["Estimated Energy Consumption (kWh)"], 13000);
    }

    #[test]
    fn test_kpi_forecast_keeps_integral_literals() {
        let forecast = KpiForecast {
            temperature: serde_json::Number::from(18u32),
            humidity: serde_json::Number::from_f64(60.5).unwrap(),
            estimated_water: 84000,
            estimated_energy: 13025,
        };
        let text = serde_json::to_string(&forecast).unwrap();
        assert!(text.contains("\"Forecast Temperature (°C)\":18,"));
        assert!(text.contains("\"Forecast Humidity (%)\":60.5,"));
    }

    #[test]
    fn test_weather_snapshot_display_keys() {
        let snapshot = WeatherSnapshot {
            temperature: "18.5°C".to_string(),
            humidity: "60%".to_string(),
            weather: "Light Rain".to_string(),
        };
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["Temperature"], "18.5°C");
        assert_eq!(value["Humidity"], "60%");
        assert_eq!(value["Weather"], "Light Rain");
    }

    #[test]
    fn test_feedback_ack_fixed_body() {
        let value = serde_json::to_value(FeedbackAck::received()).unwrap();
        assert_eq!(value["status"], "Feedback received successfully");
    }
}
