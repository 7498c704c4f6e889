//! 错误处理模块
//!
//! 定义了内核中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 易于模式匹配和错误处理
//!
//! 注意：数值退化（零长度归一化、齐次坐标 w 为零等）不是错误，
//! 它们按照宽松的数值约定静默传播。只有明确的参数校验失败才会返回错误。

use std::fmt;

/// 内核统一的 Result 类型
pub type Result<T> = std::result::Result<T, MeshKernelError>;

/// 内核的错误类型
#[derive(Debug)]
pub enum MeshKernelError {
    /// 数学运算错误
    Math(MathError),

    /// 配置错误
    Config(ConfigError),

    /// 几何数据错误
    Geometry(GeometryError),

    /// IO 错误
    Io(std::io::Error),

    /// 日志系统错误
    Log(String),
}

/// 数学运算相关的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// 分量索引超出范围
    IndexOutOfRange(usize),

    /// 数组长度不足以读取完整的分量
    ArrayTooShort { offset: usize, len: usize },
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 几何数据相关的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// 缺少必需的顶点属性
    MissingAttribute(String),

    /// 属性的元素数量与 position 不一致
    AttributeCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// 属性的 item_size 不符合要求
    InvalidItemSize { name: String, item_size: usize },

    /// 索引数据无效
    InvalidIndex(String),
}

impl fmt::Display for MeshKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshKernelError::Math(e) => write!(f, "Math error: {}", e),
            MeshKernelError::Config(e) => write!(f, "Configuration error: {}", e),
            MeshKernelError::Geometry(e) => write!(f, "Geometry error: {}", e),
            MeshKernelError::Io(e) => write!(f, "IO error: {}", e),
            MeshKernelError::Log(msg) => write!(f, "Log error: {}", msg),
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::IndexOutOfRange(index) => write!(f, "index is out of range: {}", index),
            MathError::ArrayTooShort { offset, len } => write!(
                f,
                "array of length {} is too short to read 3 elements at offset {}",
                len, offset
            ),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::MissingAttribute(name) => write!(f, "Missing attribute: {}", name),
            GeometryError::AttributeCountMismatch { name, expected, actual } => write!(
                f,
                "Attribute '{}' has {} items, expected {}",
                name, actual, expected
            ),
            GeometryError::InvalidItemSize { name, item_size } => {
                write!(f, "Attribute '{}' has unsupported item size {}", name, item_size)
            }
            GeometryError::InvalidIndex(msg) => write!(f, "Invalid index data: {}", msg),
        }
    }
}

impl std::error::Error for MeshKernelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MeshKernelError::Io(e) => Some(e),
            MeshKernelError::Math(e) => Some(e),
            MeshKernelError::Config(e) => Some(e),
            MeshKernelError::Geometry(e) => Some(e),
            MeshKernelError::Log(_) => None,
        }
    }
}

impl std::error::Error for MathError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for GeometryError {}

// 实现 From trait 以便于错误转换
impl From<std::io::Error> for MeshKernelError {
    fn from(err: std::io::Error) -> Self {
        MeshKernelError::Io(err)
    }
}

impl From<MathError> for MeshKernelError {
    fn from(err: MathError) -> Self {
        MeshKernelError::Math(err)
    }
}

impl From<ConfigError> for MeshKernelError {
    fn from(err: ConfigError) -> Self {
        MeshKernelError::Config(err)
    }
}

impl From<GeometryError> for MeshKernelError {
    fn from(err: GeometryError) -> Self {
        MeshKernelError::Geometry(err)
    }
}
