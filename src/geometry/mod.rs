/// 几何体生成和处理模块
///
/// 提供程序化网格生成（圆盘）、网格缓冲区、顶点焊接以及CPU侧网格容器。
///
/// # 模块结构
///
/// - `buffer`: 生成器输出的扁平属性数组和网格容器接口
/// - `circle`: 圆盘（扇形）网格生成器
/// - `merge`: 顶点焊接后处理
/// - `mesh`: 按名称存放属性的网格数据
/// - `vertex`: 交错顶点数据结构定义
///
/// # 数据流
///
/// ```text
/// CircleMeshDescriptor
///     ↓
/// CircleMeshBuilder::build
///     ↓
/// MeshBuffers ──(可选)── merge_vertices
///     ↓
/// MeshData (CPU侧数据)
///     ↓
/// Vec<Vertex> / 字节数据 (上传到GPU)
/// ```
///
/// # 使用示例
///
/// ```rust
/// use mesh_kernel::geometry::{CircleMeshBuilder, CircleMeshDescriptor};
///
/// let buffers = CircleMeshBuilder::new(CircleMeshDescriptor::new(2.0, 32)).build();
///
/// println!("顶点数: {}", buffers.vertex_count());
/// println!("三角形数: {}", buffers.triangle_count());
/// ```

pub mod buffer;
pub mod circle;
pub mod merge;
pub mod mesh;
pub mod vertex;

// 重新导出常用类型
pub use buffer::{BufferAttribute, MeshBuffers, MeshContainer};
pub use circle::{CircleMeshBuilder, CircleMeshDescriptor};
pub use merge::{merge_vertices, merge_vertices_with_precision};
pub use mesh::MeshData;
pub use vertex::Vertex;
