//! 仪表盘总览：KPI 预测的两项指标读出

use crate::client::{ClientError, GatewayClient};
use crate::pages::require_city;
use crate::render::metric_line;

pub async fn run(client: &GatewayClient, city: Option<&str>) {
    let Some(city) = require_city(city) else {
        println!("ℹ️ 请先用 --city 指定城市名。");
        return;
    };

    println!("Smart Dashboard Overview - City: {}", city);
    match client.kpi_forecast(city).await {
        Ok(forecast) => {
            println!("{}", metric_line("💧 Water Usage", &format!("{} Liters", forecast.estimated_water)));
            println!(
                "{}",
                metric_line("⚡ Energy Consumption", &format!("{} kWh", forecast.estimated_energy))
            );
        }
        Err(ClientError::Soft(message)) => println!("⚠️ {}", message),
        Err(e) => println!("❌ Error fetching KPI data: {}", e),
    }
}
