//! 异常检测页面：三条记录渲染成日期/类型/严重程度表格

use crate::client::{ClientError, GatewayClient};
use crate::pages::require_city;
use crate::render::render_table;

pub async fn run(client: &GatewayClient, city: Option<&str>) {
    let Some(city) = require_city(city) else {
        println!("ℹ️ 请先用 --city 指定城市名。");
        return;
    };

    println!("⚠️ Detected Anomalies - {}", city);
    match client.anomaly_check(city).await {
        Ok(report) => {
            let rows: Vec<Vec<String>> = report
                .anomalies
                .iter()
                .map(|record| {
                    vec![
                        record.date.format("%Y-%m-%d").to_string(),
                        record.kind.to_string(),
                        record.severity.to_string(),
                    ]
                })
                .collect();
            print!("{}", render_table(&["Date", "Type", "Severity"], &rows));
        }
        Err(ClientError::Soft(message)) => println!("⚠️ {}", message),
        Err(e) => println!("❌ Error fetching anomalies: {}", e),
    }
}
