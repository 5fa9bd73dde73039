use thiserror::Error;

/// 启动与运行期错误 (请求级错误使用 [`crate::utils::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("绑定端口失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("HTTP 服务异常: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
