//! 环保贴士页面

use crate::client::{ClientError, GatewayClient};

pub async fn run(client: &GatewayClient, topic: &str) {
    if topic.trim().is_empty() {
        println!("⚠️ 请先输入贴士主题。");
        return;
    }

    println!("🌱 Eco Tip Generator");
    match client.eco_tip(topic).await {
        Ok(result) => println!("✅ {}", result.tip),
        Err(ClientError::Soft(message)) => println!("❌ {}", message),
        Err(_) => println!("❌ Failed to get tip."),
    }
}
