mod api;
mod config;
mod mock;
mod providers;
mod utils;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::api::AppState;
use crate::config::GatewayConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::parse();
    utils::init_logger(&config.log_level);

    let bind = config.bind.clone();
    let state = Arc::new(AppState::new(config).context("构建网关状态失败")?);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("绑定监听地址失败: {}", bind))?;
    info!("智慧城市助手网关已启动，监听 {}", bind);
    info!("API 文档: http://{}/swagger-ui", bind);

    axum::serve(listener, app).await.context("HTTP 服务异常退出")?;
    Ok(())
}
