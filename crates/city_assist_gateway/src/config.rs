//! 网关配置
//!
//! 所有凭据和上游地址都通过命令行参数或环境变量注入，
//! 构造后以显式结构体传给各处理器，代码里不埋任何字面量。

use clap::Parser;

const DEFAULT_GENERATION_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/mistralai/Mixtral-8x7B-Instruct-v0.1";
const DEFAULT_SUMMARY_MODEL_URL: &str = "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
const DEFAULT_WEATHER_API_BASE: &str = "http://api.openweathermap.org/data/2.5";

/// 智慧城市助手网关服务
#[derive(Parser, Debug, Clone)]
#[command(name = "city-assist-gateway", version)]
pub struct GatewayConfig {
    /// HTTP 监听地址
    #[arg(long, env = "CITY_ASSIST_BIND", default_value = "0.0.0.0:8000")]
    pub bind: String,

    /// 文本生成推理服务的 API Key
    #[arg(long, env = "HF_API_KEY", hide_env_values = true)]
    pub hf_api_key: String,

    /// 天气服务的 API Key
    #[arg(long, env = "WEATHER_API_KEY", hide_env_values = true)]
    pub weather_api_key: String,

    /// 问答模型地址
    #[arg(long, env = "CHAT_MODEL_URL", default_value = DEFAULT_GENERATION_MODEL_URL)]
    pub chat_model_url: String,

    /// 环保贴士模型地址（与问答模型共用默认值）
    #[arg(long, env = "ECOTIP_MODEL_URL", default_value = DEFAULT_GENERATION_MODEL_URL)]
    pub ecotip_model_url: String,

    /// 政策摘要模型地址
    #[arg(long, env = "POLICY_SUMMARY_MODEL_URL", default_value = DEFAULT_SUMMARY_MODEL_URL)]
    pub policy_summary_model_url: String,

    /// 天气服务基础地址（current 和 forecast 端点的公共前缀）
    #[arg(long, env = "WEATHER_API_BASE", default_value = DEFAULT_WEATHER_API_BASE)]
    pub weather_api_base: String,

    /// 上游请求超时（秒）
    #[arg(long, env = "CITY_ASSIST_UPSTREAM_TIMEOUT", default_value_t = 30)]
    pub upstream_timeout: u64,

    /// 日志级别
    #[arg(long, env = "CITY_ASSIST_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
impl GatewayConfig {
    /// 测试用配置，凭据为占位值，不会发起真实上游请求
    pub fn for_tests() -> Self {
        Self {
            bind: "127.0.0.1:0".to_string(),
            hf_api_key: "test-hf-key".to_string(),
            weather_api_key: "test-weather-key".to_string(),
            chat_model_url: DEFAULT_GENERATION_MODEL_URL.to_string(),
            ecotip_model_url: DEFAULT_GENERATION_MODEL_URL.to_string(),
            policy_summary_model_url: DEFAULT_SUMMARY_MODEL_URL.to_string(),
            weather_api_base: DEFAULT_WEATHER_API_BASE.to_string(),
            upstream_timeout: 5,
            log_level: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_required_keys() {
        let config = GatewayConfig::try_parse_from([
            "city-assist-gateway",
            "--hf-api-key",
            "k1",
            "--weather-api-key",
            "k2",
        ])
        .unwrap();
        assert_eq!(config.bind, "0.0.0.0:8000");
        assert_eq!(config.chat_model_url, DEFAULT_GENERATION_MODEL_URL);
        assert_eq!(config.ecotip_model_url, config.chat_model_url);
        assert_eq!(config.upstream_timeout, 30);
    }

    #[test]
    fn test_missing_keys_is_an_error() {
        assert!(GatewayConfig::try_parse_from(["city-assist-gateway"]).is_err());
    }
}
