pub mod text;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init_logger(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(build_filter(log_level))
        .try_init()
        .expect("初始化日志失败");
}

/// 构建日志过滤器，压低 HTTP 栈的噪音
fn build_filter(base_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::builder().parse_lossy(format!(
        "{},\
            hyper=warn,\
            reqwest=warn,\
            tower_http=warn,\
            h2=warn",
        base_level
    ))
}
