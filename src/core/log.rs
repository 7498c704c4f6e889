//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//!
//! # 使用示例
//!
//! ```no_run
//! use mesh_kernel::core::{log, config::LogLevel};
//!
//! // 初始化日志系统
//! log::init_logger(LogLevel::Info, false, None)?;
//!
//! // 结构化日志
//! tracing::info!(segments = 32, "Disc generated");
//! # Ok::<(), mesh_kernel::core::MeshKernelError>(())
//! ```

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::path::Path;

use super::config::LogLevel;
use super::error::{MeshKernelError, Result};

/// 初始化日志系统
///
/// 必须在程序开始时调用一次，重复调用返回 `MeshKernelError::Log`。
/// 设置了 `RUST_LOG` 环境变量时以环境变量为准。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否同时输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "mesh_kernel.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true);

    let file_layer = if file_output {
        let (directory, filename) = split_log_path(log_file_path.unwrap_or(DEFAULT_LOG_FILE));

        // 每天滚动
        let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, filename);

        Some(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(file_appender),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| MeshKernelError::Log(e.to_string()))
}

const DEFAULT_LOG_FILE: &str = "mesh_kernel.log";

/// 把日志路径拆成目录和文件名
fn split_log_path(log_path: &str) -> (&Path, &str) {
    let path = Path::new(log_path);
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_LOG_FILE);
    (directory, filename)
}

/// 内核日志 - Info 级别
#[macro_export]
macro_rules! kernel_info {
    ($($arg:tt)*) => {
        tracing::info!(target: "mesh_kernel::kernel", $($arg)*)
    };
}

/// 内核日志 - Warn 级别
#[macro_export]
macro_rules! kernel_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "mesh_kernel::kernel", $($arg)*)
    };
}

/// 内核日志 - Debug 级别
#[macro_export]
macro_rules! kernel_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "mesh_kernel::kernel", $($arg)*)
    };
}

impl LogLevel {
    /// `EnvFilter` 使用的指令字符串
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}
