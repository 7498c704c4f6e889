/// 网格数据结构模块
///
/// 定义CPU侧的网格数据容器。生成器通过 `MeshContainer` 接口把索引和顶点属性写入其中，
/// 之后可以转换为交错顶点数组上传到 GPU。

use std::collections::BTreeMap;

use super::buffer::{BufferAttribute, MeshBuffers, MeshContainer};
use super::vertex::Vertex;
use crate::core::error::{GeometryError, Result};

/// CPU侧网格数据
///
/// 按名称存放顶点属性（"position"、"normal"、"uv" 等），以及三角形索引。
/// 这是一个简单的数据持有者，不包含GPU资源。
///
/// # 示例
///
/// ```rust
/// use mesh_kernel::geometry::{CircleMeshBuilder, CircleMeshDescriptor, MeshData};
///
/// let buffers = CircleMeshBuilder::new(CircleMeshDescriptor::new(1.0, 16)).build();
/// let mesh = MeshData::from_buffers(buffers, "Disc");
///
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 16);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// 网格名称（可选），用于调试和识别
    pub name: Option<String>,

    /// 索引数组
    ///
    /// 三角形顶点索引，每3个索引定义一个三角形。
    pub indices: Vec<u32>,

    /// 顶点属性，按名称排序
    pub attributes: BTreeMap<String, BufferAttribute>,
}

impl MeshData {
    /// 创建一个空的网格数据
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建一个指定名称的空网格数据
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// 由生成器输出构造
    pub fn from_buffers(buffers: MeshBuffers, name: impl Into<String>) -> Self {
        let mut mesh = Self::with_name(name);
        buffers.apply_to(&mut mesh);
        mesh
    }

    /// 按名称获取属性
    pub fn attribute(&self, name: &str) -> Option<&BufferAttribute> {
        self.attributes.get(name)
    }

    /// 获取顶点数量（以 position 属性为准）
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.attribute("position").map_or(0, BufferAttribute::count)
    }

    /// 获取索引数量
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// 获取三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// 验证索引数据的有效性
    ///
    /// 检查：
    /// - 索引数量是3的倍数
    /// - 所有索引都在顶点范围内
    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::InvalidIndex(format!(
                "index count must be a multiple of 3, got {}",
                self.indices.len()
            )).into());
        }

        let vertex_count = self.vertex_count();
        if let Some(i) = self.indices.iter().position(|&index| index as usize >= vertex_count) {
            return Err(GeometryError::InvalidIndex(format!(
                "index {} at position {} is out of range for {} vertices",
                self.indices[i], i, vertex_count
            )).into());
        }

        Ok(())
    }

    /// 转换为交错顶点数组
    ///
    /// position 是必需的；缺少 normal 或 uv 时对应字段填 0。
    pub fn vertices(&self) -> Result<Vec<Vertex>> {
        let positions = self
            .attribute("position")
            .ok_or_else(|| GeometryError::MissingAttribute("position".to_string()))?;
        let count = positions.count();

        Self::check_attribute("position", positions, 3, count)?;
        let normals = self.attribute("normal");
        if let Some(normals) = normals {
            Self::check_attribute("normal", normals, 3, count)?;
        }
        let uvs = self.attribute("uv");
        if let Some(uvs) = uvs {
            Self::check_attribute("uv", uvs, 2, count)?;
        }

        let read3 = |attribute: Option<&BufferAttribute>, i: usize| -> [f32; 3] {
            attribute
                .and_then(|a| a.get_item(i))
                .map_or([0.0; 3], |v| [v[0], v[1], v[2]])
        };

        let vertices = (0..count)
            .map(|i| {
                let texcoord = uvs
                    .and_then(|a| a.get_item(i))
                    .map_or([0.0; 2], |v| [v[0], v[1]]);
                Vertex::new(read3(Some(positions), i), read3(normals, i), texcoord)
            })
            .collect();

        Ok(vertices)
    }

    /// 交错顶点数据的字节视图，可直接上传到顶点缓冲区
    pub fn vertex_bytes(&self) -> Result<Vec<u8>> {
        let vertices = self.vertices()?;
        Ok(bytemuck::cast_slice(&vertices).to_vec())
    }

    /// 索引数据的字节视图
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// 清空所有数据
    pub fn clear(&mut self) {
        self.indices.clear();
        self.attributes.clear();
        self.name = None;
    }

    fn check_attribute(
        name: &str,
        attribute: &BufferAttribute,
        item_size: usize,
        expected: usize,
    ) -> Result<()> {
        if attribute.item_size != item_size {
            return Err(GeometryError::InvalidItemSize {
                name: name.to_string(),
                item_size: attribute.item_size,
            }.into());
        }

        if attribute.count() != expected {
            return Err(GeometryError::AttributeCountMismatch {
                name: name.to_string(),
                expected,
                actual: attribute.count(),
            }.into());
        }

        Ok(())
    }
}

impl MeshContainer for MeshData {
    fn set_index(&mut self, indices: Vec<u32>) {
        self.indices = indices;
    }

    fn add_attribute(&mut self, name: &str, attribute: BufferAttribute) {
        self.attributes.insert(name.to_string(), attribute);
    }
}
