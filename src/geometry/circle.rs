//! 圆盘网格生成
//!
//! 把圆盘（或扇形）细分为以圆心为公共顶点的三角扇。
//!
//! # 顶点布局
//!
//! ```text
//! 索引 0            圆心 (0, 0, 0)，UV (0.5, 0.5)
//! 索引 1..=n+1      边缘顶点，角度 theta_start + s / n * theta_length
//! ```
//!
//! 完整一圈时最后一个边缘顶点与第一个重合，但不做合并，
//! 以保证接缝两侧的 UV 插值正确。需要焊接时使用 [`merge_vertices`]。
//!
//! # 使用示例
//!
//! ```rust
//! use mesh_kernel::geometry::circle::{CircleMeshBuilder, CircleMeshDescriptor};
//!
//! let buffers = CircleMeshBuilder::new(CircleMeshDescriptor::new(1.0, 4)).build();
//!
//! assert_eq!(buffers.vertex_count(), 6);
//! assert_eq!(buffers.triangle_count(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::buffer::MeshBuffers;
use super::merge::merge_vertices;
use crate::math::{Vector2, Vector3};

/// 最少分段数，少于 3 个三角形无法构成圆盘
pub const MIN_SEGMENTS: u32 = 3;

/// 默认分段数
pub const DEFAULT_SEGMENTS: u32 = 8;

const NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// 圆盘网格参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleMeshDescriptor {
    /// 半径，0 或 NaN 时按 1 处理；负半径会被接受，生成翻转的圆盘
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// 分段数（三角形个数），小于 3 时按 3 处理
    #[serde(default = "default_segments")]
    pub segments: u32,

    /// 起始角（弧度）
    #[serde(default)]
    pub theta_start: f64,

    /// 扫掠角（弧度），默认一整圈
    #[serde(default = "default_theta_length")]
    pub theta_length: f64,
}

fn default_radius() -> f64 { 1.0 }
fn default_segments() -> u32 { DEFAULT_SEGMENTS }
fn default_theta_length() -> f64 { std::f64::consts::TAU }

impl Default for CircleMeshDescriptor {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            segments: default_segments(),
            theta_start: 0.0,
            theta_length: default_theta_length(),
        }
    }
}

impl CircleMeshDescriptor {
    /// 完整圆盘
    pub fn new(radius: f64, segments: u32) -> Self {
        Self {
            radius,
            segments,
            ..Default::default()
        }
    }

    /// 设置扇形的起始角和扫掠角
    pub fn with_theta(mut self, theta_start: f64, theta_length: f64) -> Self {
        self.theta_start = theta_start;
        self.theta_length = theta_length;
        self
    }

    /// 套用默认值和下限后的参数
    pub fn normalized(&self) -> Self {
        let radius = if self.radius == 0.0 || self.radius.is_nan() {
            default_radius()
        } else {
            self.radius
        };

        Self {
            radius,
            segments: self.segments.max(MIN_SEGMENTS),
            theta_start: self.theta_start,
            theta_length: self.theta_length,
        }
    }
}

/// 圆盘网格生成器
///
/// 不持有跨调用的可变状态，同一个生成器可以在多个线程中同时调用 `build`。
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleMeshBuilder {
    descriptor: CircleMeshDescriptor,
}

impl CircleMeshBuilder {
    pub fn new(descriptor: CircleMeshDescriptor) -> Self {
        Self { descriptor }
    }

    /// 实际用于生成的参数（已套用默认值和下限）
    pub fn descriptor(&self) -> CircleMeshDescriptor {
        self.descriptor.normalized()
    }

    /// 生成未焊接的三角扇缓冲区
    ///
    /// 输出 `segments + 2` 个顶点、`segments` 个三角形。
    /// 三角形为 `(i, i + 1, 0)`，从 +Z 方向看为逆时针。
    pub fn build(&self) -> MeshBuffers {
        if self.descriptor.segments < MIN_SEGMENTS {
            crate::kernel_warn!(
                requested = self.descriptor.segments,
                used = MIN_SEGMENTS,
                "Circle segment count below minimum, clamping"
            );
        }

        let CircleMeshDescriptor { radius, segments, theta_start, theta_length } = self.descriptor();
        let vertex_count = segments as usize + 2;
        let mut buffers = MeshBuffers::with_capacity(vertex_count, segments as usize * 3);

        let mut vertex = Vector3::zeros();
        let mut uv = Vector2::default();

        // 圆心
        buffers.push_vertex([0.0, 0.0, 0.0], NORMAL, [0.5, 0.5]);

        // 边缘顶点，s 取到 segments（含），共 segments + 1 个
        for s in 0..=segments {
            let segment = theta_start + s as f64 / segments as f64 * theta_length;

            vertex.set_x(radius * segment.cos()).set_y(radius * segment.sin());

            // 平面投影到以 (0.5, 0.5) 为中心的单位 UV 空间
            uv.set(
                (vertex.x / radius + 1.0) / 2.0,
                (vertex.y / radius + 1.0) / 2.0,
            );

            buffers.push_vertex(
                [vertex.x as f32, vertex.y as f32, vertex.z as f32],
                NORMAL,
                uv.to_f32_array(),
            );
        }

        for i in 1..=segments {
            buffers.push_triangle(i, i + 1, 0);
        }

        crate::kernel_debug!(
            radius,
            segments,
            vertices = buffers.vertex_count(),
            triangles = buffers.triangle_count(),
            "Circle mesh generated"
        );

        buffers
    }

    /// 生成后焊接重复顶点
    ///
    /// 完整一圈时接缝处的重复顶点会被合并。
    pub fn build_merged(&self) -> MeshBuffers {
        merge_vertices(&self.build())
    }
}

impl From<CircleMeshDescriptor> for CircleMeshBuilder {
    fn from(descriptor: CircleMeshDescriptor) -> Self {
        Self::new(descriptor)
    }
}
