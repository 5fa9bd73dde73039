//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to the
//! whole process. A log directory switches output to a daily rolling file.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with stdout output
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = build_filter(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "grievance-server");
            let _ = subscriber.with_writer(file_appender).with_ansi(false).try_init();
            return;
        }
    }

    // try_init: tests may initialize more than once
    let _ = subscriber.try_init();
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger_with_file(Some("debug"), None);
        init_logger();
    }

    #[test]
    fn test_missing_log_dir_falls_back_to_stdout() {
        init_logger_with_file(Some("warn"), Some("/nonexistent/grievance-logs"));
    }
}
