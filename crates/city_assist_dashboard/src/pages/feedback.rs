//! 市民反馈页面
//!
//! 姓名或描述为空时不调用网关，直接给出校验提示；
//! 提交结果只看传输层状态，软错误契约对这个端点不存在。

use clap::ValueEnum;
use strum::Display;

use crate::client::GatewayClient;

/// 问题类型，展示名与旧版下拉框一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
pub enum IssueType {
    Garbage,
    #[value(name = "water-supply")]
    #[strum(serialize = "Water Supply")]
    WaterSupply,
    Electricity,
    Roads,
    Others,
}

/// 提交前校验：姓名和描述都不能为空
pub fn validate(name: &str, description: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err("请填写姓名和问题描述。");
    }
    Ok(())
}

/// 组装反馈正文，格式与旧版一致
pub fn build_message(issue_type: IssueType, description: &str) -> String {
    format!("Issue: {} - {}", issue_type, description)
}

pub async fn run(client: &GatewayClient, name: &str, issue_type: IssueType, description: &str) {
    if let Err(warning) = validate(name, description) {
        println!("⚠️ {}", warning);
        return;
    }

    let message = build_message(issue_type, description);
    match client.submit_feedback(name, &message).await {
        Ok(status) if status.is_success() => println!("✅ Feedback submitted successfully!"),
        Ok(status) => println!("❌ Backend error: {}", status.as_u16()),
        Err(e) => println!("❌ Request failed: {}", e),
    }
}
