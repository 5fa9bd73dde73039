/// 服务配置 - 申诉服务的所有配置项
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | GEMINI_API_KEY | (未设置) | 生成式 AI 密钥，未设置时聊天机器人返回配置提示 |
/// | GEMINI_MODEL | gemini-2.0-flash | 模型名称 |
/// | GEMINI_API_BASE | https://generativelanguage.googleapis.com/v1beta | API 地址 |
/// | CHAT_HISTORY_WINDOW | 10 | 拼接进提示词的最近消息条数 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志目录，存在时按天滚动写文件 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 GEMINI_API_KEY=... cargo run -p grievance-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 生成式 AI 配置
    pub gemini: GeminiConfig,
    /// 提示词中保留的历史消息条数
    pub chat_history_window: usize,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

/// 生成式 AI 接口配置
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API 密钥 (唯一的密钥类环境变量)
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".into(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let gemini_defaults = GeminiConfig::default();
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            gemini: GeminiConfig {
                api_key: std::env::var("GEMINI_API_KEY")
                    .ok()
                    .filter(|s| !s.trim().is_empty()),
                model: std::env::var("GEMINI_MODEL").unwrap_or(gemini_defaults.model),
                api_base: std::env::var("GEMINI_API_BASE").unwrap_or(gemini_defaults.api_base),
            },
            chat_history_window: std::env::var("CHAT_HISTORY_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景，不读取环境变量中的密钥
    pub fn with_overrides(http_port: u16, api_key: Option<String>) -> Self {
        Self {
            http_port,
            environment: "development".into(),
            gemini: GeminiConfig {
                api_key,
                ..GeminiConfig::default()
            },
            chat_history_window: 10,
            log_level: "info".into(),
            log_dir: None,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 聊天机器人是否已配置密钥
    pub fn chatbot_configured(&self) -> bool {
        self.gemini.api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
