//! 模拟数据生成
//!
//! 可持续发展报告和异常检测两个端点没有上游，每次调用
//! 都用随机数现场生成。随机源通过参数注入，测试里用固定
//! 种子的 `StdRng` 断言确定性输出。

use chrono::{Duration, NaiveDate};
use rand::Rng;

use city_assist_contract::{AnomalyRecord, AnomalyReport, AnomalyType, Severity, SustainabilityReport};

use crate::utils::text::title_case;

/// 生成一份可持续发展报告，数值范围与旧版契约一致（闭区间）
pub fn sustainability_report<R: Rng + ?Sized>(rng: &mut R, city: &str) -> SustainabilityReport {
    let carbon_reduction = rng.gen_range(5..=20);
    let recycling_rate = rng.gen_range(40..=80);
    let green_spaces = rng.gen_range(5..=20);
    let ev_stations = rng.gen_range(50..=200);

    SustainabilityReport {
        city: title_case(city),
        carbon_emissions: format!("Reduced by {}%", carbon_reduction),
        recycling_rate: format!("{}%", recycling_rate),
        green_spaces: format!("{} new parks added", green_spaces),
        ev_stations,
    }
}

/// 生成异常报告：恰好 3 条，日期为 today、today-1、today-2（按此顺序），
/// 类型和严重程度各自独立均匀抽取，允许重复
pub fn anomaly_report<R: Rng + ?Sized>(rng: &mut R, city: &str, today: NaiveDate) -> AnomalyReport {
    let anomalies = (0..3i64)
        .map(|i| AnomalyRecord {
            date: today - Duration::days(i),
            kind: AnomalyType::ALL[rng.gen_range(0..AnomalyType::ALL.len())],
            severity: Severity::ALL[rng.gen_range(0..Severity::ALL.len())],
            city: city.to_string(),
        })
        .collect();

    AnomalyReport {
        city: city.to_string(),
        anomalies,
    }
}
