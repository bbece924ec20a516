//! 可持续发展报告页面：五个带标签字段的列表

use crate::client::{ClientError, GatewayClient};
use crate::pages::require_city;
use crate::render::metric_line;

pub async fn run(client: &GatewayClient, city: Option<&str>) {
    let Some(city) = require_city(city) else {
        println!("ℹ️ 请先用 --city 指定城市名。");
        return;
    };

    println!("📊 Sustainability Summary - {}", city);
    match client.sustainability_report(city).await {
        Ok(report) => {
            println!("{}", metric_line("City", &report.city));
            println!("{}", metric_line("Carbon Emissions", &report.carbon_emissions));
            println!("{}", metric_line("Recycling Rate", &report.recycling_rate));
            println!("{}", metric_line("Green Spaces", &report.green_spaces));
            println!("{}", metric_line("EV Charging Stations", &report.ev_stations.to_string()));
        }
        Err(ClientError::Soft(message)) => println!("⚠️ {}", message),
        Err(e) => println!("❌ Error fetching report: {}", e),
    }
}
