//! MeshKernel - 三维数学内核与程序化网格生成
//!
//! 提供链式调用风格的向量、矩阵、四元数等数学类型，
//! 以及生成圆盘（三角扇）网格的生成器。
//!
//! # 模块结构
//!
//! - `core`: 核心功能模块（日志、配置、错误处理）
//! - `math`: 数学库（Vector2/3、Matrix3/4、Quaternion、Euler、球坐标和柱坐标）
//! - `geometry`: 几何体模块（网格缓冲区、圆盘生成器、顶点焊接、网格容器）
//!
//! # 使用示例
//!
//! ```
//! use mesh_kernel::geometry::{CircleMeshBuilder, CircleMeshDescriptor};
//! use mesh_kernel::math::Vector3;
//!
//! let buffers = CircleMeshBuilder::new(CircleMeshDescriptor::new(1.0, 8)).build();
//! assert_eq!(buffers.vertex_count(), 10);
//!
//! let mut v = Vector3::new(3.0, 4.0, 0.0);
//! v.normalize().multiply_scalar(10.0);
//! assert!((v.length() - 10.0).abs() < 1e-12);
//! ```

pub mod core;
pub mod math;
pub mod geometry;
