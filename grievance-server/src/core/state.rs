use std::sync::Arc;

use crate::chatbot::{ChatService, GeminiClient, GenerativeClient};
use crate::complaints::{ComplaintRepository, InMemoryComplaintStore, SelectionController};
use crate::core::Config;
use crate::engagement::{AppealDesk, FeedBoard, HotTopicCatalogue};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有字段都是 Arc 或内部持有 Arc，克隆成本极低，可直接作为 axum State。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | complaints | 申诉存储 |
/// | selection | 当前选中的申诉 |
/// | feed | 社区动态 |
/// | hot_topics | 热点话题 |
/// | appeals | 上诉记录 |
/// | chat | 聊天机器人 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub complaints: Arc<dyn ComplaintRepository>,
    pub selection: SelectionController,
    pub feed: FeedBoard,
    pub hot_topics: HotTopicCatalogue,
    pub appeals: AppealDesk,
    pub chat: ChatService,
}

impl ServerState {
    /// 使用 Gemini 客户端初始化
    pub fn initialize(config: &Config) -> Self {
        let client = Arc::new(GeminiClient::new(config.gemini.clone()));
        Self::with_client(config, client)
    }

    /// 使用自定义生成式客户端初始化 (测试替身)
    pub fn with_client(config: &Config, client: Arc<dyn GenerativeClient>) -> Self {
        let complaints: Arc<dyn ComplaintRepository> = Arc::new(InMemoryComplaintStore::seeded());
        let chat = ChatService::new(client, complaints.clone(), config.chat_history_window);

        if !config.chatbot_configured() {
            tracing::warn!("GEMINI_API_KEY not set, chatbot replies will ask for configuration");
        }

        Self {
            config: Arc::new(config.clone()),
            complaints,
            selection: SelectionController::new(),
            feed: FeedBoard::seeded(),
            hot_topics: HotTopicCatalogue::seeded(),
            appeals: AppealDesk::new(),
            chat,
        }
    }
}
