//! 网格缓冲区模块
//!
//! 定义网格生成器的输出格式：按属性分开存放的扁平数组（非交错），
//! 以及接收这些数组的网格容器接口。

/// 顶点属性数组
///
/// `array` 中每 `item_size` 个元素构成一个顶点的属性值，
/// 例如 position 的 `item_size` 为 3，uv 为 2。
#[derive(Debug, Clone, PartialEq)]
pub struct BufferAttribute {
    pub array: Vec<f32>,
    pub item_size: usize,
}

impl BufferAttribute {
    pub fn new(array: Vec<f32>, item_size: usize) -> Self {
        Self { array, item_size }
    }

    /// 属性值的个数（即顶点数）
    #[inline]
    pub fn count(&self) -> usize {
        if self.item_size == 0 {
            0
        } else {
            self.array.len() / self.item_size
        }
    }

    /// 第 `index` 个属性值的第 `component` 个分量
    ///
    /// 索引越界或 `component >= item_size` 时返回 `None`。
    pub fn get_component(&self, index: usize, component: usize) -> Option<f32> {
        if component >= self.item_size || index >= self.count() {
            return None;
        }
        self.array.get(index * self.item_size + component).copied()
    }

    pub fn get_x(&self, index: usize) -> Option<f32> {
        self.get_component(index, 0)
    }

    pub fn get_y(&self, index: usize) -> Option<f32> {
        self.get_component(index, 1)
    }

    pub fn get_z(&self, index: usize) -> Option<f32> {
        self.get_component(index, 2)
    }

    /// 第 `index` 个属性值的全部分量
    pub fn get_item(&self, index: usize) -> Option<&[f32]> {
        if index >= self.count() {
            return None;
        }
        let start = index * self.item_size;
        self.array.get(start..start + self.item_size)
    }
}

/// 网格容器接口
///
/// 生成器不关心容器的内部表示，只通过这两个操作把数据交给它。
pub trait MeshContainer {
    /// 设置三角形列表的索引
    fn set_index(&mut self, indices: Vec<u32>);

    /// 添加名为 `name` 的顶点属性
    fn add_attribute(&mut self, name: &str, attribute: BufferAttribute);
}

/// 生成器输出的网格缓冲区
///
/// - `indices`：三角形列表，每 3 个索引一个三角形
/// - `positions`：每顶点 3 个 f32
/// - `normals`：每顶点 3 个 f32
/// - `uvs`：每顶点 2 个 f32
///
/// 可以直接上传到 GPU 顶点缓冲区。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub indices: Vec<u32>,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按顶点数和索引数预分配
    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(index_capacity),
            positions: Vec::with_capacity(vertex_capacity * 3),
            normals: Vec::with_capacity(vertex_capacity * 3),
            uvs: Vec::with_capacity(vertex_capacity * 2),
        }
    }

    /// 追加一个顶点
    pub fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) {
        self.positions.extend_from_slice(&position);
        self.normals.extend_from_slice(&normal);
        self.uvs.extend_from_slice(&uv);
    }

    /// 追加一个三角形
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let p = self.positions.get(index * 3..index * 3 + 3)?;
        Some([p[0], p[1], p[2]])
    }

    pub fn normal(&self, index: usize) -> Option<[f32; 3]> {
        let n = self.normals.get(index * 3..index * 3 + 3)?;
        Some([n[0], n[1], n[2]])
    }

    pub fn uv(&self, index: usize) -> Option<[f32; 2]> {
        let t = self.uvs.get(index * 2..index * 2 + 2)?;
        Some([t[0], t[1]])
    }

    /// 把缓冲区交给网格容器
    ///
    /// 依次调用 `set_index` 和三次 `add_attribute`（"position"、"normal"、"uv"）。
    pub fn apply_to<C: MeshContainer + ?Sized>(self, container: &mut C) {
        container.set_index(self.indices);
        container.add_attribute("position", BufferAttribute::new(self.positions, 3));
        container.add_attribute("normal", BufferAttribute::new(self.normals, 3));
        container.add_attribute("uv", BufferAttribute::new(self.uvs, 2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingContainer {
        index: Vec<u32>,
        attributes: Vec<(String, usize, usize)>,
    }

    impl MeshContainer for RecordingContainer {
        fn set_index(&mut self, indices: Vec<u32>) {
            self.index = indices;
        }

        fn add_attribute(&mut self, name: &str, attribute: BufferAttribute) {
            self.attributes.push((name.to_string(), attribute.item_size, attribute.count()));
        }
    }

    #[test]
    fn test_attribute_accessors() {
        let attribute = BufferAttribute::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3);

        assert_eq!(attribute.count(), 2);
        assert_eq!(attribute.get_x(1), Some(4.0));
        assert_eq!(attribute.get_z(0), Some(3.0));
        assert_eq!(attribute.get_x(2), None);
        assert_eq!(attribute.get_item(1), Some(&[4.0, 5.0, 6.0][..]));
    }

    #[test]
    fn test_component_past_item_size() {
        let uvs = BufferAttribute::new(vec![0.1, 0.2, 0.3, 0.4], 2);
        assert_eq!(uvs.get_z(0), None);
        assert_eq!(uvs.get_y(1), Some(0.4));
    }

    #[test]
    fn test_zero_item_size() {
        let attribute = BufferAttribute::new(vec![1.0], 0);
        assert_eq!(attribute.count(), 0);
        assert_eq!(attribute.get_x(0), None);
    }

    #[test]
    fn test_push_and_counts() {
        let mut buffers = MeshBuffers::with_capacity(3, 3);
        buffers.push_vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0]);
        buffers.push_vertex([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0]);
        buffers.push_vertex([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0]);
        buffers.push_triangle(0, 1, 2);

        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.position(1), Some([1.0, 0.0, 0.0]));
        assert_eq!(buffers.uv(2), Some([0.0, 1.0]));
        assert_eq!(buffers.normal(3), None);
    }

    #[test]
    fn test_apply_to_container() {
        let mut buffers = MeshBuffers::new();
        buffers.push_vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.5, 0.5]);
        buffers.push_triangle(0, 0, 0);

        let mut container = RecordingContainer::default();
        buffers.apply_to(&mut container);

        assert_eq!(container.index, vec![0, 0, 0]);
        assert_eq!(
            container.attributes,
            vec![
                ("position".to_string(), 3, 1),
                ("normal".to_string(), 3, 1),
                ("uv".to_string(), 2, 1),
            ]
        );
    }
}
