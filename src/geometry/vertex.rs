/// 交错顶点定义模块
///
/// 定义 GPU 顶点缓冲区使用的交错顶点结构，包含位置、法线和 UV 坐标。

use bytemuck::{Pod, Zeroable};

/// 交错顶点结构
///
/// 内存布局与GPU兼容，使用 `#[repr(C)]` 保证顺序和对齐。
///
/// # 内存布局
///
/// - position: 12 bytes (3 * f32)
/// - normal: 12 bytes (3 * f32)
/// - texcoord: 8 bytes (2 * f32)
/// - **总计**: 32 bytes
///
/// # 示例
///
/// ```rust
/// use mesh_kernel::geometry::vertex::Vertex;
///
/// let vertex = Vertex {
///     position: [0.0, 0.0, 0.0],
///     normal: [0.0, 0.0, 1.0],
///     texcoord: [0.5, 0.5],
/// };
/// ```
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    pub position: [f32; 3],

    /// 法线向量 (nx, ny, nz)
    pub normal: [f32; 3],

    /// 纹理坐标 (u, v)
    ///
    /// UV坐标用于纹理映射，通常范围在 [0.0, 1.0]。
    pub texcoord: [f32; 2],
}

impl Vertex {
    #[inline]
    pub fn new(position: [f32; 3], normal: [f32; 3], texcoord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }
}
