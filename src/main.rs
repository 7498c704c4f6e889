//! MeshKernel - 圆盘网格生成工具
//!
//! 读取配置文件和命令行参数，生成一个圆盘网格并输出统计信息。
//!
//! # 使用方法
//!
//! ```bash
//! # 使用配置文件
//! cargo run
//!
//! # 命令行覆盖
//! cargo run -- --radius 2.5 --segments 64 --merge
//! ```
//!
//! # 架构概览
//!
//! ```text
//! ┌─────────────┐
//! │   main.rs   │  应用程序入口
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Core     │  配置/日志/错误
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Geometry   │  圆盘生成 → 焊接 → MeshData
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Math     │  Vector2/3 等
//! └─────────────┘
//! ```

use anyhow::Context;
use mesh_kernel::core::{log, Config};
use mesh_kernel::geometry::{CircleMeshBuilder, MeshData};
use mesh_kernel::kernel_info;
use tracing::{debug, info};

/// 应用程序入口点
///
/// # 流程
///
/// 1. 加载配置文件（config.toml）
/// 2. 应用命令行参数覆盖
/// 3. 初始化日志系统
/// 4. 生成网格（可选焊接）
/// 5. 转换为交错顶点并输出统计
///
/// # 命令行参数
///
/// - `--radius <value>`: 圆盘半径
/// - `--segments <value>`: 分段数（最少 3）
/// - `--theta-start <value>`: 起始角（弧度）
/// - `--theta-length <value>`: 扫掠角（弧度）
/// - `--merge`: 焊接重复顶点
fn main() -> anyhow::Result<()> {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("config.toml");

    // 2. 应用命令行参数
    config.apply_args(std::env::args().skip(1));

    // 3. 验证配置
    config.validate().context("Invalid configuration")?;

    // 4. 初始化日志系统
    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file)?;
    info!(version = env!("CARGO_PKG_VERSION"), "MeshKernel starting...");

    let descriptor = config.circle;
    info!(
        radius = descriptor.radius,
        segments = descriptor.segments,
        theta_start = descriptor.theta_start,
        theta_length = descriptor.theta_length,
        merge = config.mesh.merge,
        "Circle configuration"
    );

    // 5. 生成网格
    let builder = CircleMeshBuilder::new(descriptor);
    let buffers = if config.mesh.merge {
        builder.build_merged()
    } else {
        builder.build()
    };

    let mesh = MeshData::from_buffers(buffers, "Circle");
    mesh.validate().context("Generated mesh failed validation")?;

    // 6. 交错顶点
    let vertex_bytes = mesh.vertex_bytes().context("Failed to interleave vertices")?;
    debug!(
        vertex_bytes = vertex_bytes.len(),
        index_bytes = mesh.index_bytes().len(),
        "Buffer sizes"
    );

    kernel_info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Mesh generated"
    );

    println!(
        "{}: {} vertices, {} triangles, {} vertex bytes, {} index bytes",
        mesh.name.as_deref().unwrap_or("mesh"),
        mesh.vertex_count(),
        mesh.triangle_count(),
        vertex_bytes.len(),
        mesh.index_bytes().len()
    );

    Ok(())
}
