mod client;
mod pages;
mod render;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

use crate::client::GatewayClient;
use crate::pages::feedback::IssueType;

/// 智慧城市助手仪表盘
#[derive(Parser, Debug)]
#[command(name = "city-assist-dashboard", version)]
struct Cli {
    /// 网关地址
    #[arg(long, env = "CITY_ASSIST_BACKEND", default_value = "http://localhost:8000")]
    backend_url: String,

    /// 城市名，需要城市的页面共用
    #[arg(long, env = "CITY_ASSIST_CITY")]
    city: Option<String>,

    /// 日志级别
    #[arg(long, env = "CITY_ASSIST_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    page: Page,
}

/// 页面选择，与旧版侧边栏的八个页面一一对应
#[derive(Subcommand, Debug)]
enum Page {
    /// 仪表盘总览：KPI 预测指标读出
    Summary,
    /// 市民反馈提交
    Feedback {
        /// 姓名
        #[arg(long)]
        name: String,
        /// 问题类型
        #[arg(long, value_enum)]
        issue_type: IssueType,
        /// 问题描述
        #[arg(long)]
        description: String,
    },
    /// 环保贴士生成
    EcoTips {
        /// 贴士主题
        #[arg(long)]
        topic: String,
    },
    /// KPI 走势图（本地模拟数据，不调用网关）
    KpiChart,
    /// 异常检测
    Anomalies,
    /// 可持续发展报告
    Sustainability,
    /// 政策摘要（--text 或标准输入）
    Policy {
        #[arg(long)]
        text: Option<String>,
    },
    /// 智能助手对话（--question 单次，否则交互循环）
    Chat {
        #[arg(long)]
        question: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let client = GatewayClient::new(&cli.backend_url).context("创建网关客户端失败")?;
    let city = cli.city.as_deref();

    match cli.page {
        Page::Summary => pages::summary::run(&client, city).await,
        Page::Feedback {
            name,
            issue_type,
            description,
        } => pages::feedback::run(&client, &name, issue_type, &description).await,
        Page::EcoTips { topic } => pages::eco_tips::run(&client, &topic).await,
        Page::KpiChart => pages::kpi_chart::run(&mut rand::thread_rng(), Local::now().date_naive()),
        Page::Anomalies => pages::anomalies::run(&client, city).await,
        Page::Sustainability => pages::sustainability::run(&client, city).await,
        Page::Policy { text } => {
            let text = pages::policy::resolve_text(text).context("读取政策正文失败")?;
            pages::policy::run(&client, &text).await;
        }
        Page::Chat { question } => pages::chat::run(&client, question.as_deref()).await,
    }

    Ok(())
}

fn init_logger(log_level: &str) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::builder().parse_lossy(format!("{},hyper=warn,reqwest=warn", log_level)))
        .try_init()
        .expect("初始化日志失败");
}
