//! 矩阵类型
//!
//! 只承担 [`Vector3`](super::Vector3) 变换运算的操作数角色，元素按列主序存储，
//! 与 `nalgebra` 的内部存储顺序一致，可以直接互相转换。
//! 常用矩阵的构造交给 `nalgebra` 完成。

use super::Vector3;

/// 3x3 矩阵（列主序）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub elements: [f64; 9],
}

/// 4x4 矩阵（列主序）
///
/// `elements[12..15]` 为仿射变换的平移部分。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub elements: [f64; 16],
}

impl Matrix3 {
    pub fn identity() -> Self {
        nalgebra::Matrix3::<f64>::identity().into()
    }

    /// 从列主序元素创建
    pub fn from_column_major(elements: [f64; 9]) -> Self {
        Self { elements }
    }
}

impl Matrix4 {
    pub fn identity() -> Self {
        nalgebra::Matrix4::<f64>::identity().into()
    }

    /// 从列主序元素创建
    pub fn from_column_major(elements: [f64; 16]) -> Self {
        Self { elements }
    }

    /// 平移矩阵
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        nalgebra::Matrix4::new_translation(&nalgebra::Vector3::new(x, y, z)).into()
    }

    /// 非均匀缩放矩阵
    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        nalgebra::Matrix4::new_nonuniform_scaling(&nalgebra::Vector3::new(x, y, z)).into()
    }

    /// 绕 X 轴旋转
    pub fn rotation_x(angle: f64) -> Self {
        nalgebra::Matrix4::from_axis_angle(&nalgebra::Vector3::x_axis(), angle).into()
    }

    /// 绕 Y 轴旋转
    pub fn rotation_y(angle: f64) -> Self {
        nalgebra::Matrix4::from_axis_angle(&nalgebra::Vector3::y_axis(), angle).into()
    }

    /// 绕 Z 轴旋转
    pub fn rotation_z(angle: f64) -> Self {
        nalgebra::Matrix4::from_axis_angle(&nalgebra::Vector3::z_axis(), angle).into()
    }

    /// 绕任意轴旋转，`axis` 会先被归一化
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let axis = nalgebra::Unit::new_normalize(nalgebra::Vector3::from(*axis));
        nalgebra::Matrix4::from_axis_angle(&axis, angle).into()
    }

    /// 左上角 3x3 子矩阵
    pub fn upper_left(&self) -> Matrix3 {
        let e = &self.elements;
        Matrix3::from_column_major([
            e[0], e[1], e[2],
            e[4], e[5], e[6],
            e[8], e[9], e[10],
        ])
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<nalgebra::Matrix3<f64>> for Matrix3 {
    fn from(m: nalgebra::Matrix3<f64>) -> Self {
        let mut elements = [0.0; 9];
        elements.copy_from_slice(m.as_slice());
        Self { elements }
    }
}

impl From<nalgebra::Matrix4<f64>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<f64>) -> Self {
        let mut elements = [0.0; 16];
        elements.copy_from_slice(m.as_slice());
        Self { elements }
    }
}

impl From<Matrix4> for nalgebra::Matrix4<f64> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_column_slice(&m.elements)
    }
}
