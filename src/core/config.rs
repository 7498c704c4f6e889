//! 配置管理模块
//!
//! 提供内核配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [circle]
//! radius = 1.0
//! segments = 32
//! theta_start = 0.0
//! theta_length = 6.283185307179586
//!
//! [mesh]
//! merge = false       # 是否对生成的网格做顶点焊接
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};
use crate::geometry::circle::CircleMeshDescriptor;

/// 内核配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 圆盘网格参数
    #[serde(default)]
    pub circle: CircleMeshDescriptor,

    /// 网格后处理配置
    #[serde(default)]
    pub mesh: MeshConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 网格后处理配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeshConfig {
    /// 生成后是否焊接重复顶点
    #[serde(default)]
    pub merge: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "mesh_kernel.log".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use mesh_kernel::core::Config;
    ///
    /// let config = Config::from_file("config.toml")?;
    /// # Ok::<(), mesh_kernel::core::MeshKernelError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--radius <value>`: 圆盘半径
    /// - `--segments <value>`: 分段数
    /// - `--theta-start <value>`: 起始角（弧度）
    /// - `--theta-length <value>`: 扫掠角（弧度）
    /// - `--merge`: 生成后焊接重复顶点
    ///
    /// 无法解析的值会被忽略，保留原配置。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        if args.iter().any(|a| a == "--merge") {
            self.mesh.merge = true;
        }

        if let Some(radius) = parse_flag(&args, "--radius") {
            self.circle.radius = radius;
        }

        if let Some(segments) = parse_flag(&args, "--segments") {
            self.circle.segments = segments;
        }

        if let Some(theta_start) = parse_flag(&args, "--theta-start") {
            self.circle.theta_start = theta_start;
        }

        if let Some(theta_length) = parse_flag(&args, "--theta-length") {
            self.circle.theta_length = theta_length;
        }
    }

    /// 验证配置的有效性
    ///
    /// 网格生成本身对数值是宽松的（零半径、负半径、过少的分段都会被接受或修正），
    /// 这里只拒绝无法产生有限坐标的输入。
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("circle.radius", self.circle.radius),
            ("circle.theta_start", self.circle.theta_start),
            ("circle.theta_length", self.circle.theta_length),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("Value must be finite, got {}", value),
                }.into());
            }
        }

        if self.logging.file_output && self.logging.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "Log file path must not be empty when file output is enabled".to_string(),
            }.into());
        }

        Ok(())
    }
}

/// 查找 `flag` 之后的参数并解析，失败时返回 `None`
fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1)?.parse().ok()
}
