use grievance_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 环境变量与日志
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Grievance server starting...");

    // 2. 初始化服务器状态
    let state = ServerState::initialize(&config);

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
