//! 天气服务客户端
//!
//! 按城市名查询当前天气和 5 天预报，公制单位。
//! 网关只依赖响应里的温度、湿度和天气描述三个字段。

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::ProviderError;

/// 当前天气（网关关心的子集）
#[derive(Debug, Clone)]
pub struct CurrentWeather {
    pub temp: f64,
    pub humidity: f64,
    pub description: String,
}

/// 预报首条的温湿度。`*_raw` 保留上游的 JSON 数值字面量，
/// KPI 端点回显时不把整数写成 `18.0`。
#[derive(Debug, Clone)]
pub struct ForecastEntry {
    pub temp: f64,
    pub humidity: f64,
    pub temp_raw: serde_json::Number,
    pub humidity_raw: serde_json::Number,
}

#[derive(Deserialize)]
struct CurrentResponse {
    main: MainFields,
    weather: Vec<WeatherDescription>,
}

#[derive(Deserialize)]
struct MainFields {
    temp: serde_json::Number,
    humidity: serde_json::Number,
}

#[derive(Deserialize)]
struct WeatherDescription {
    description: String,
}

#[derive(Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
}

#[derive(Deserialize)]
struct ForecastItem {
    main: MainFields,
}

fn number_to_f64(value: &serde_json::Number, field: &str) -> Result<f64, ProviderError> {
    value
        .as_f64()
        .ok_or_else(|| ProviderError::Malformed(format!("{} is not representable as f64", field)))
}

/// 天气服务客户端
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// 查询当前天气
    pub async fn current(&self, city: &str) -> Result<CurrentWeather, ProviderError> {
        let body = self.fetch("weather", city).await?;
        let parsed: CurrentResponse = serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        let description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| ProviderError::Malformed("weather description missing".to_string()))?;
        Ok(CurrentWeather {
            temp: number_to_f64(&parsed.main.temp, "temp")?,
            humidity: number_to_f64(&parsed.main.humidity, "humidity")?,
            description,
        })
    }

    /// 查询预报并取第一条（最近的一个预报时段）
    pub async fn forecast_first(&self, city: &str) -> Result<ForecastEntry, ProviderError> {
        let body = self.fetch("forecast", city).await?;
        let parsed: ForecastResponse = serde_json::from_str(&body).map_err(|e| ProviderError::Malformed(e.to_string()))?;
        let first = parsed
            .list
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Malformed("forecast list empty".to_string()))?;
        Ok(ForecastEntry {
            temp: number_to_f64(&first.main.temp, "temp")?,
            humidity: number_to_f64(&first.main.humidity, "humidity")?,
            temp_raw: first.main.temp,
            humidity_raw: first.main.humidity,
        })
    }

    async fn fetch(&self, endpoint: &str, city: &str) -> Result<String, ProviderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("查询天气服务: {} city={}", url, city);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
