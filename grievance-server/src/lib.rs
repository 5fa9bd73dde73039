//! Grievance Server - 市民申诉服务
//!
//! # 模块结构
//!
//! ```text
//! grievance-server/src/
//! ├── core/          # 配置、状态、服务器启动
//! ├── complaints/    # 申诉存储、选中状态与详情面板
//! ├── engagement/    # 社区动态、热点话题、上诉
//! ├── chatbot/       # 会话、话题偏好、提示词、生成式 AI 客户端
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志与错误类型
//! ```

pub mod api;
pub mod chatbot;
pub mod complaints;
pub mod core;
pub mod engagement;
pub mod utils;

pub use core::{Config, Server, ServerState, build_app};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::{init_logger, init_logger_with_file};
