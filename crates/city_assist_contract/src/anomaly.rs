//! 异常检测相关的枚举和记录结构

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// 异常类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
pub enum AnomalyType {
    #[serde(rename = "Energy Spike")]
    #[strum(serialize = "Energy Spike")]
    EnergySpike,
    #[serde(rename = "Water Leakage")]
    #[strum(serialize = "Water Leakage")]
    WaterLeakage,
    #[serde(rename = "Traffic Surge")]
    #[strum(serialize = "Traffic Surge")]
    TrafficSurge,
    #[serde(rename = "Power Outage")]
    #[strum(serialize = "Power Outage")]
    PowerOutage,
    #[serde(rename = "Air Quality Drop")]
    #[strum(serialize = "Air Quality Drop")]
    AirQualityDrop,
}

impl AnomalyType {
    /// 全部异常类型，随机生成时按下标均匀抽取
    pub const ALL: [AnomalyType; 5] = [
        AnomalyType::EnergySpike,
        AnomalyType::WaterLeakage,
        AnomalyType::TrafficSurge,
        AnomalyType::PowerOutage,
        AnomalyType::AirQualityDrop,
    ];
}

/// 异常严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];
}

/// 单条异常记录
///
/// 对外键名为首字母大写的展示键（`Date` / `Type` / `Severity` / `City`），
/// 与旧版契约保持逐字节一致。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnomalyRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Type")]
    pub kind: AnomalyType,
    #[serde(rename = "Severity")]
    pub severity: Severity,
    #[serde(rename = "City")]
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_type_wire_names() {
        let json = serde_json::to_string(&AnomalyType::AirQualityDrop).unwrap();
        assert_eq!(json, "\"Air Quality Drop\"");
        assert_eq!(AnomalyType::EnergySpike.to_string(), "Energy Spike");
    }

    #[test]
    fn test_severity_roundtrip() {
        let parsed: Severity = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Severity::Medium);
        assert_eq!(Severity::High.to_string(), "High");
    }

    #[test]
    fn test_record_uses_display_keys() {
        let record = AnomalyRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
            kind: AnomalyType::PowerOutage,
            severity: Severity::Low,
            city: "Paris".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["Date"], "2026-08-30");
        assert_eq!(value["Type"], "Power Outage");
        assert_eq!(value["Severity"], "Low");
        assert_eq!(value["City"], "Paris");
    }
}
