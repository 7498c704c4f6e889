//! 三维向量
//!
//! 可变的三分量数值类型，提供完整的代数、几何和变换运算。
//!
//! 所有 `set*` 和算术运算都原地修改 `self` 并返回 `&mut Self`，支持链式调用：
//!
//! ```rust
//! use mesh_kernel::math::Vector3;
//!
//! let mut v = Vector3::new(1.0, 2.0, 3.0);
//! v.multiply_scalar(2.0).add(&Vector3::new(1.0, 1.0, 1.0)).normalize();
//! assert!((v.length() - 1.0).abs() < 1e-12);
//! ```
//!
//! 需要两个操作数的运算使用 `*_vectors` 形式（`add_vectors`、`cross_vectors` 等），
//! 不会修改输入向量。类型实现了 `Copy`，`clone()` 即复制一份新值。

use super::matrix::{Matrix3, Matrix4};
use super::quaternion::{Euler, Quaternion};
use super::spherical::{Cylindrical, Spherical};
use super::utils;
use crate::core::error::MathError;
use crate::geometry::buffer::BufferAttribute;

/// 三维向量 (x, y, z)
///
/// 分量为 64 位浮点数。不做有限性检查，NaN 会按 IEEE 规则传播。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// 创建新的向量
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// 零向量
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    // ========================================================================
    // 分量访问
    // ========================================================================

    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn set_scalar(&mut self, scalar: f64) -> &mut Self {
        self.set(scalar, scalar, scalar)
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// 按索引设置分量
    ///
    /// 索引 0/1/2 分别对应 x/y/z，其他索引返回 [`MathError::IndexOutOfRange`]，
    /// 且向量保持不变。
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<&mut Self, MathError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(MathError::IndexOutOfRange(index)),
        }
        Ok(self)
    }

    /// 按索引读取分量
    pub fn get_component(&self, index: usize) -> Result<f64, MathError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MathError::IndexOutOfRange(index)),
        }
    }

    /// 复制另一个向量的分量
    pub fn copy(&mut self, v: &Vector3) -> &mut Self {
        *self = *v;
        self
    }

    // ========================================================================
    // 算术运算
    // ========================================================================

    pub fn add(&mut self, v: &Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.x += s;
        self.y += s;
        self.z += s;
        self
    }

    /// `self = a + b`
    pub fn add_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
        self.z = a.z + b.z;
        self
    }

    /// `self += v * s`，一步完成，不产生临时向量
    pub fn add_scaled_vector(&mut self, v: &Vector3, s: f64) -> &mut Self {
        self.x += v.x * s;
        self.y += v.y * s;
        self.z += v.z * s;
        self
    }

    pub fn sub(&mut self, v: &Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    pub fn sub_scalar(&mut self, s: f64) -> &mut Self {
        self.x -= s;
        self.y -= s;
        self.z -= s;
        self
    }

    /// `self = a - b`
    pub fn sub_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self.z = a.z - b.z;
        self
    }

    pub fn multiply(&mut self, v: &Vector3) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self.z *= v.z;
        self
    }

    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// `self = a * b`（逐分量）
    pub fn multiply_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        self.x = a.x * b.x;
        self.y = a.y * b.y;
        self.z = a.z * b.z;
        self
    }

    pub fn divide(&mut self, v: &Vector3) -> &mut Self {
        self.x /= v.x;
        self.y /= v.y;
        self.z /= v.z;
        self
    }

    pub fn divide_scalar(&mut self, scalar: f64) -> &mut Self {
        self.multiply_scalar(1.0 / scalar)
    }

    pub fn min(&mut self, v: &Vector3) -> &mut Self {
        self.x = min_nan(self.x, v.x);
        self.y = min_nan(self.y, v.y);
        self.z = min_nan(self.z, v.z);
        self
    }

    pub fn max(&mut self, v: &Vector3) -> &mut Self {
        self.x = max_nan(self.x, v.x);
        self.y = max_nan(self.y, v.y);
        self.z = max_nan(self.z, v.z);
        self
    }

    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    // ========================================================================
    // 点积、叉积与范数
    // ========================================================================

    pub fn dot(&self, v: &Vector3) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// `self = self × v`
    pub fn cross(&mut self, v: &Vector3) -> &mut Self {
        let a = *self;
        self.cross_vectors(&a, v)
    }

    /// `self = a × b`（右手系）
    pub fn cross_vectors(&mut self, a: &Vector3, b: &Vector3) -> &mut Self {
        let (ax, ay, az) = (a.x, a.y, a.z);
        let (bx, by, bz) = (b.x, b.y, b.z);

        self.x = ay * bz - az * by;
        self.y = az * bx - ax * bz;
        self.z = ax * by - ay * bx;
        self
    }

    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    pub fn manhattan_length(&self) -> f64 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// 归一化为单位长度
    ///
    /// 长度恰好为 0 时以 1 作为除数，零向量保持不变而不是变成 NaN。
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.divide_scalar(or_one(length))
    }

    /// 保持方向，将长度设为 `length`
    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.normalize().multiply_scalar(length)
    }

    // ========================================================================
    // 变换
    // ========================================================================

    /// 左乘 3x3 矩阵（列主序）
    pub fn apply_matrix3(&mut self, m: &Matrix3) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = &m.elements;

        self.x = e[0] * x + e[3] * y + e[6] * z;
        self.y = e[1] * x + e[4] * y + e[7] * z;
        self.z = e[2] * x + e[5] * y + e[8] * z;
        self
    }

    /// 作为齐次坐标点（w = 1）左乘 4x4 矩阵，然后做透视除法
    ///
    /// 计算得到的 w 为零时不做保护，结果为 Infinity/NaN。
    pub fn apply_matrix4(&mut self, m: &Matrix4) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = &m.elements;

        let w = 1.0 / (e[3] * x + e[7] * y + e[11] * z + e[15]);

        self.x = (e[0] * x + e[4] * y + e[8] * z + e[12]) * w;
        self.y = (e[1] * x + e[5] * y + e[9] * z + e[13]) * w;
        self.z = (e[2] * x + e[6] * y + e[10] * z + e[14]) * w;
        self
    }

    /// 用单位四元数旋转向量
    ///
    /// 展开计算 `q * v * q⁻¹`，不构造中间四元数。
    pub fn apply_quaternion(&mut self, q: &Quaternion) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let (qx, qy, qz, qw) = (q.x, q.y, q.z, q.w);

        // q * v
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // (q * v) * q⁻¹
        self.x = ix * qw + iw * -qx + iy * -qz - iz * -qy;
        self.y = iy * qw + iw * -qy + iz * -qx - ix * -qz;
        self.z = iz * qw + iw * -qz + ix * -qy - iy * -qx;
        self
    }

    /// 按欧拉角旋转
    pub fn apply_euler(&mut self, euler: &Euler) -> &mut Self {
        let q = Quaternion::from_euler(euler);
        self.apply_quaternion(&q)
    }

    /// 绕单位轴 `axis` 旋转 `angle` 弧度
    pub fn apply_axis_angle(&mut self, axis: &Vector3, angle: f64) -> &mut Self {
        let q = Quaternion::from_axis_angle(axis, angle);
        self.apply_quaternion(&q)
    }

    /// 把向量当作方向处理：只应用仿射矩阵的左上 3x3 部分（忽略平移），然后归一化
    pub fn transform_direction(&mut self, m: &Matrix4) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let e = &m.elements;

        self.x = e[0] * x + e[4] * y + e[8] * z;
        self.y = e[1] * x + e[5] * y + e[9] * z;
        self.z = e[2] * x + e[6] * y + e[10] * z;
        self.normalize()
    }

    // ========================================================================
    // 投影与反射
    // ========================================================================

    /// 投影到向量 `v` 上：`v * (dot(self, v) / |v|²)`
    pub fn project_on_vector(&mut self, v: &Vector3) -> &mut Self {
        let scalar = v.dot(self) / v.length_sq();
        self.copy(v).multiply_scalar(scalar)
    }

    /// 投影到法线为 `plane_normal` 的平面上
    pub fn project_on_plane(&mut self, plane_normal: &Vector3) -> &mut Self {
        let mut projected = *self;
        projected.project_on_vector(plane_normal);
        self.sub(&projected)
    }

    /// 关于法线为 `normal` 的平面反射
    ///
    /// `normal` 必须是单位向量。
    pub fn reflect(&mut self, normal: &Vector3) -> &mut Self {
        let offset = *normal * (2.0 * self.dot(normal));
        self.sub(&offset)
    }

    // ========================================================================
    // 夹角与距离
    // ========================================================================

    /// 与 `v` 的夹角（弧度）
    ///
    /// 余弦值先钳制到 [-1, 1]，避免近平行向量因浮点误差越界导致 acos 返回 NaN。
    pub fn angle_to(&self, v: &Vector3) -> f64 {
        let theta = self.dot(v) / (self.length_sq() * v.length_sq()).sqrt();
        utils::clamp(theta, -1.0, 1.0).acos()
    }

    pub fn distance_to(&self, v: &Vector3) -> f64 {
        self.distance_to_squared(v).sqrt()
    }

    pub fn distance_to_squared(&self, v: &Vector3) -> f64 {
        let dx = self.x - v.x;
        let dy = self.y - v.y;
        let dz = self.z - v.z;
        dx * dx + dy * dy + dz * dz
    }

    pub fn manhattan_distance_to(&self, v: &Vector3) -> f64 {
        (self.x - v.x).abs() + (self.y - v.y).abs() + (self.z - v.z).abs()
    }

    // ========================================================================
    // 取整
    // ========================================================================

    pub fn floor(&mut self) -> &mut Self {
        self.set(self.x.floor(), self.y.floor(), self.z.floor())
    }

    pub fn ceil(&mut self) -> &mut Self {
        self.set(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }

    /// 四舍五入，.5 向正无穷方向取整
    pub fn round(&mut self) -> &mut Self {
        self.set(round_half_up(self.x), round_half_up(self.y), round_half_up(self.z))
    }

    /// 向零取整：负数向上取整，非负数向下取整
    pub fn round_to_zero(&mut self) -> &mut Self {
        self.set(self.x.trunc(), self.y.trunc(), self.z.trunc())
    }

    // ========================================================================
    // 钳制
    // ========================================================================

    /// 逐分量钳制到 [min, max]，要求 `min <= max`
    pub fn clamp(&mut self, min: &Vector3, max: &Vector3) -> &mut Self {
        self.x = max_nan(min.x, min_nan(max.x, self.x));
        self.y = max_nan(min.y, min_nan(max.y, self.y));
        self.z = max_nan(min.z, min_nan(max.z, self.z));
        self
    }

    pub fn clamp_scalar(&mut self, min_val: f64, max_val: f64) -> &mut Self {
        let min = Vector3::new(min_val, min_val, min_val);
        let max = Vector3::new(max_val, max_val, max_val);
        self.clamp(&min, &max)
    }

    /// 保持方向，把长度钳制到 [min, max]
    pub fn clamp_length(&mut self, min: f64, max: f64) -> &mut Self {
        let length = self.length();
        self.divide_scalar(or_one(length))
            .multiply_scalar(max_nan(min, min_nan(max, length)))
    }

    // ========================================================================
    // 插值
    // ========================================================================

    /// `self += (v - self) * alpha`
    pub fn lerp(&mut self, v: &Vector3, alpha: f64) -> &mut Self {
        self.x += (v.x - self.x) * alpha;
        self.y += (v.y - self.y) * alpha;
        self.z += (v.z - self.z) * alpha;
        self
    }

    /// `self = v1 + (v2 - v1) * alpha`
    pub fn lerp_vectors(&mut self, v1: &Vector3, v2: &Vector3, alpha: f64) -> &mut Self {
        self.sub_vectors(v2, v1).multiply_scalar(alpha).add(v1)
    }

    // ========================================================================
    // 坐标系与矩阵
    // ========================================================================

    pub fn set_from_spherical(&mut self, s: &Spherical) -> &mut Self {
        let sin_phi_radius = s.phi.sin() * s.radius;

        self.x = sin_phi_radius * s.theta.sin();
        self.y = s.phi.cos() * s.radius;
        self.z = sin_phi_radius * s.theta.cos();
        self
    }

    pub fn set_from_cylindrical(&mut self, c: &Cylindrical) -> &mut Self {
        self.x = c.radius * c.theta.sin();
        self.y = c.y;
        self.z = c.radius * c.theta.cos();
        self
    }

    /// 读取仿射矩阵的平移部分
    pub fn set_from_matrix_position(&mut self, m: &Matrix4) -> &mut Self {
        let e = &m.elements;
        self.set(e[12], e[13], e[14])
    }

    /// 读取仿射矩阵三个基向量的长度（缩放）
    pub fn set_from_matrix_scale(&mut self, m: &Matrix4) -> &mut Self {
        let column = |index: usize| {
            let e = &m.elements[index * 4..index * 4 + 3];
            (e[0] * e[0] + e[1] * e[1] + e[2] * e[2]).sqrt()
        };
        self.set(column(0), column(1), column(2))
    }

    /// 读取矩阵第 `index` 列的前三个元素
    pub fn set_from_matrix_column(&mut self, m: &Matrix4, index: usize) -> Result<&mut Self, MathError> {
        if index > 3 {
            return Err(MathError::IndexOutOfRange(index));
        }
        self.from_array(&m.elements, index * 4)
    }

    // ========================================================================
    // 序列化
    // ========================================================================

    /// 从 `array[offset..offset + 3]` 读取分量
    pub fn from_array(&mut self, array: &[f64], offset: usize) -> Result<&mut Self, MathError> {
        match array.get(offset..offset.saturating_add(3)) {
            Some(e) => Ok(self.set(e[0], e[1], e[2])),
            None => Err(MathError::ArrayTooShort { offset, len: array.len() }),
        }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// 写入 `array[offset..offset + 3]`，数组长度不足时自动补零扩展
    pub fn write_to_array<'a>(&self, array: &'a mut Vec<f64>, offset: usize) -> &'a mut Vec<f64> {
        if array.len() < offset + 3 {
            array.resize(offset + 3, 0.0);
        }
        array[offset..offset + 3].copy_from_slice(&self.to_array());
        array
    }

    /// 读取顶点属性中第 `index` 个元素
    ///
    /// `item_size` 小于 3 的属性，缺失的分量取 0。
    pub fn from_buffer_attribute(&mut self, attribute: &BufferAttribute, index: usize) -> Result<&mut Self, MathError> {
        if index >= attribute.count() {
            return Err(MathError::IndexOutOfRange(index));
        }

        let component = |c: usize| attribute.get_component(index, c).map_or(0.0, f64::from);
        Ok(self.set(component(0), component(1), component(2)))
    }
}

/// 零长度时以 1 代替，避免除零
#[inline]
fn or_one(length: f64) -> f64 {
    if length == 0.0 || length.is_nan() { 1.0 } else { length }
}

/// 任一操作数为 NaN 时返回 NaN，与 `f64::min` 不同
#[inline]
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

/// 任一操作数为 NaN 时返回 NaN，与 `f64::max` 不同
#[inline]
fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

/// .5 向正无穷取整，在 0.5 附近和 2^52 以上也保持精确
#[inline]
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

// ============================================================================
// 运算符与类型转换
// ============================================================================

impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(a: [f64; 3]) -> Self {
        Vector3::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quaternion::EulerOrder;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn assert_vec_eq(a: &Vector3, b: &Vector3) {
        assert!(
            a.distance_to(b) < EPS,
            "向量不相等: {:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_component_access() {
        let mut v = Vector3::zeros();
        v.set_component(0, 1.0).unwrap();
        v.set_component(1, 2.0).unwrap();
        v.set_component(2, 3.0).unwrap();

        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v.get_component(1).unwrap(), 2.0);
    }

    #[test]
    fn test_component_out_of_range() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);

        assert_eq!(v.set_component(3, 5.0).unwrap_err(), MathError::IndexOutOfRange(3));
        assert_eq!(v.get_component(7).unwrap_err(), MathError::IndexOutOfRange(7));
        // 失败的写入不修改向量
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_sub_round_trip() {
        let v = Vector3::new(0.1, -2.5, 1e6);
        let w = Vector3::new(3.3, 0.7, -42.0);

        let mut r = v;
        r.add(&w).sub(&w);
        assert!(r.distance_to(&v) < 1e-9);
    }

    #[test]
    fn test_vectors_variants_do_not_mutate_inputs() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        let mut r = Vector3::zeros();

        r.add_vectors(&a, &b);
        assert_eq!(r, Vector3::new(5.0, 7.0, 9.0));
        r.sub_vectors(&a, &b);
        assert_eq!(r, Vector3::new(-3.0, -3.0, -3.0));
        r.multiply_vectors(&a, &b);
        assert_eq!(r, Vector3::new(4.0, 10.0, 18.0));

        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(b, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_add_scaled_vector() {
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v.add_scaled_vector(&Vector3::new(1.0, 2.0, 3.0), 2.0);
        assert_eq!(v, Vector3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_scalar_ops() {
        let mut v = Vector3::new(2.0, 4.0, 8.0);
        v.add_scalar(1.0).sub_scalar(3.0).multiply_scalar(2.0).divide_scalar(4.0);
        assert_eq!(v, Vector3::new(0.0, 1.0, 3.0));
    }

    #[test]
    fn test_cross_right_handed() {
        let mut z = Vector3::zeros();
        z.cross_vectors(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(z, Vector3::new(0.0, 0.0, 1.0));

        let mut y = Vector3::new(0.0, 0.0, 1.0);
        y.cross(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(y, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_norms() {
        let v = Vector3::new(3.0, -4.0, 12.0);
        assert_eq!(v.length_sq(), 169.0);
        assert_eq!(v.length(), 13.0);
        assert_eq!(v.manhattan_length(), 19.0);
        assert_eq!(v.dot(&Vector3::new(1.0, 1.0, 1.0)), 11.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let mut v = Vector3::zeros();
        v.normalize();
        assert_eq!(v, Vector3::zeros());
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_normalize_and_set_length() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert_vec_eq(&v, &Vector3::new(0.0, 0.6, 0.8));

        v.set_length(10.0);
        assert_vec_eq(&v, &Vector3::new(0.0, 6.0, 8.0));
    }

    #[test]
    fn test_apply_matrix3() {
        // 列主序：第一列 (1,2,3)，第二列 (4,5,6)，第三列 (7,8,9)
        let m = Matrix3::from_column_major([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v.apply_matrix3(&m);
        assert_eq!(v, Vector3::new(12.0, 15.0, 18.0));
    }

    #[test]
    fn test_apply_matrix4_translation() {
        let m = Matrix4::translation(1.0, 2.0, 3.0);
        let mut v = Vector3::new(1.0, 1.0, 1.0);
        v.apply_matrix4(&m);
        assert_vec_eq(&v, &Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_apply_matrix4_perspective_divide() {
        let mut elements = Matrix4::identity().elements;
        elements[15] = 2.0;
        let m = Matrix4::from_column_major(elements);

        let mut v = Vector3::new(2.0, 4.0, 6.0);
        v.apply_matrix4(&m);
        assert_vec_eq(&v, &Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_apply_matrix4_degenerate_w_propagates() {
        let mut elements = Matrix4::identity().elements;
        elements[15] = 0.0;
        let m = Matrix4::from_column_major(elements);

        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.apply_matrix4(&m);
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_apply_quaternion_matches_nalgebra() {
        let axis = nalgebra::Unit::new_normalize(nalgebra::Vector3::new(1.0, 2.0, -0.5));
        let rotation = nalgebra::UnitQuaternion::from_axis_angle(&axis, 1.234);
        let input = nalgebra::Vector3::new(0.3, -1.7, 2.2);

        let expected: Vector3 = rotation.transform_vector(&input).into();

        let mut v: Vector3 = input.into();
        v.apply_quaternion(&Quaternion::from(rotation));
        assert_vec_eq(&v, &expected);
    }

    #[test]
    fn test_apply_axis_angle() {
        let mut v = Vector3::new(1.0, 0.0, 0.0);
        v.apply_axis_angle(&Vector3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        assert_vec_eq(&v, &Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_apply_euler() {
        let mut v = Vector3::new(0.0, 1.0, 0.0);
        v.apply_euler(&Euler::new(FRAC_PI_2, 0.0, 0.0, EulerOrder::Xyz));
        assert_vec_eq(&v, &Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_transform_direction_ignores_translation() {
        let m = Matrix4::translation(10.0, 20.0, 30.0);
        let mut v = Vector3::new(0.0, 0.0, 5.0);
        v.transform_direction(&m);
        assert_vec_eq(&v, &Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_project_on_vector_and_plane() {
        let mut v = Vector3::new(2.0, 3.0, 4.0);
        v.project_on_vector(&Vector3::new(0.0, 2.0, 0.0));
        assert_vec_eq(&v, &Vector3::new(0.0, 3.0, 0.0));

        let mut p = Vector3::new(2.0, 3.0, 4.0);
        p.project_on_plane(&Vector3::new(0.0, 1.0, 0.0));
        assert_vec_eq(&p, &Vector3::new(2.0, 0.0, 4.0));
    }

    #[test]
    fn test_reflect_is_involution() {
        let mut n = Vector3::new(1.0, 2.0, 2.0);
        n.normalize();

        let original = Vector3::new(0.5, -3.0, 7.25);
        let mut v = original;
        v.reflect(&n).reflect(&n);
        assert_vec_eq(&v, &original);
    }

    #[test]
    fn test_reflect_off_floor() {
        let mut v = Vector3::new(1.0, -1.0, 0.0);
        v.reflect(&Vector3::new(0.0, 1.0, 0.0));
        assert_vec_eq(&v, &Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_angle_to_near_parallel() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let w = Vector3::new(1.0, 1e-10, 0.0);
        let angle = v.angle_to(&w);
        assert!(!angle.is_nan());
        assert!(angle < 1e-6);

        let anti = Vector3::new(-3.0, -1e-12, 0.0);
        let angle = v.angle_to(&anti);
        assert!(!angle.is_nan());
        assert!((angle - PI).abs() < 1e-6);
    }

    #[test]
    fn test_angle_to_orthogonal() {
        let v = Vector3::new(0.0, 2.0, 0.0);
        let w = Vector3::new(0.0, 0.0, 5.0);
        assert!((v.angle_to(&w) - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_distances() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance_to_squared(&b), 25.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(a.manhattan_distance_to(&b), 7.0);
    }

    #[test]
    fn test_rounding() {
        let base = Vector3::new(1.5, -1.5, -0.2);

        let mut v = base;
        v.floor();
        assert_eq!(v, Vector3::new(1.0, -2.0, -1.0));

        let mut v = base;
        v.ceil();
        assert_eq!(v, Vector3::new(2.0, -1.0, 0.0));

        let mut v = base;
        v.round();
        assert_eq!(v, Vector3::new(2.0, -1.0, 0.0));

        let mut v = Vector3::new(1.7, -1.7, 0.0);
        v.round_to_zero();
        assert_eq!(v, Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_round_at_float_edges() {
        let mut v = Vector3::new(0.49999999999999994, 4503599627370497.0, -0.5);
        v.round();
        assert_eq!(v, Vector3::new(0.0, 4503599627370497.0, 0.0));

        let mut v = Vector3::new(-2.5, f64::INFINITY, f64::NAN);
        v.round();
        assert_eq!(v.x, -2.0);
        assert_eq!(v.y, f64::INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    fn test_clamp() {
        let mut v = Vector3::new(-5.0, 0.5, 5.0);
        v.clamp(&Vector3::new(-1.0, 0.0, 0.0), &Vector3::new(1.0, 1.0, 2.0));
        assert_eq!(v, Vector3::new(-1.0, 0.5, 2.0));

        let mut v = Vector3::new(-5.0, 0.5, 5.0);
        v.clamp_scalar(0.0, 1.0);
        assert_eq!(v, Vector3::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_clamp_length() {
        let mut v = Vector3::new(0.0, 0.0, 10.0);
        v.clamp_length(1.0, 2.0);
        assert_vec_eq(&v, &Vector3::new(0.0, 0.0, 2.0));

        let mut v = Vector3::new(0.3, 0.0, 0.0);
        v.clamp_length(1.0, 2.0);
        assert_vec_eq(&v, &Vector3::new(1.0, 0.0, 0.0));

        // 零向量没有方向，保持为零
        let mut v = Vector3::zeros();
        v.clamp_length(1.0, 2.0);
        assert_eq!(v, Vector3::zeros());
    }

    #[test]
    fn test_lerp() {
        let mut v = Vector3::new(0.0, 0.0, 0.0);
        v.lerp(&Vector3::new(10.0, -10.0, 4.0), 0.25);
        assert_eq!(v, Vector3::new(2.5, -2.5, 1.0));

        let a = Vector3::new(1.0, 1.0, 1.0);
        let b = Vector3::new(3.0, 5.0, 7.0);
        let mut r = Vector3::zeros();
        r.lerp_vectors(&a, &b, 0.5);
        assert_eq!(r, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_min_max_negate() {
        let mut v = Vector3::new(1.0, 5.0, -2.0);
        v.min(&Vector3::new(0.0, 6.0, -3.0));
        assert_eq!(v, Vector3::new(0.0, 5.0, -3.0));

        v.max(&Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(v, Vector3::new(1.0, 5.0, 1.0));

        v.negate();
        assert_eq!(v, Vector3::new(-1.0, -5.0, -1.0));
    }

    #[test]
    fn test_nan_propagates_through_min_max_clamp() {
        let mut v = Vector3::new(f64::NAN, 0.0, 0.0);
        v.min(&Vector3::new(5.0, 5.0, 5.0));
        assert!(v.x.is_nan());
        assert_eq!(v.y, 0.0);

        let mut v = Vector3::new(f64::NAN, 0.0, 0.0);
        v.max(&Vector3::new(-5.0, -5.0, -5.0));
        assert!(v.x.is_nan());

        let mut v = Vector3::new(0.0, 0.0, 0.0);
        v.max(&Vector3::new(f64::NAN, 1.0, 1.0));
        assert!(v.x.is_nan());
        assert_eq!(v.y, 1.0);

        let mut v = Vector3::new(f64::NAN, 0.5, 0.5);
        v.clamp(&Vector3::zeros(), &Vector3::new(1.0, 1.0, 1.0));
        assert!(v.x.is_nan());
        assert_eq!(v.y, 0.5);

        let mut v = Vector3::new(f64::NAN, 2.0, -2.0);
        v.clamp_scalar(0.0, 1.0);
        assert!(v.x.is_nan());
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 0.0);

        let mut v = Vector3::new(f64::NAN, 3.0, 4.0);
        v.clamp_length(1.0, 2.0);
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_spherical_and_cylindrical() {
        let mut v = Vector3::zeros();
        v.set_from_spherical(&Spherical::new(2.0, FRAC_PI_2, 0.0));
        assert_vec_eq(&v, &Vector3::new(0.0, 0.0, 2.0));

        v.set_from_cylindrical(&Cylindrical::new(3.0, FRAC_PI_2, 7.0));
        assert_vec_eq(&v, &Vector3::new(3.0, 7.0, 0.0));
    }

    #[test]
    fn test_matrix_position_scale_column() {
        let m = Matrix4::translation(4.0, 5.0, 6.0);
        let mut v = Vector3::zeros();
        v.set_from_matrix_position(&m);
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));

        let s = Matrix4::scaling(2.0, 3.0, 4.0);
        v.set_from_matrix_scale(&s);
        assert_vec_eq(&v, &Vector3::new(2.0, 3.0, 4.0));

        v.set_from_matrix_column(&m, 3).unwrap();
        assert_eq!(v, Vector3::new(4.0, 5.0, 6.0));
        assert!(v.set_from_matrix_column(&m, 4).is_err());
    }

    #[test]
    fn test_array_serialization() {
        let data = [9.0, 1.0, 2.0, 3.0];
        let mut v = Vector3::zeros();
        v.from_array(&data, 1).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(
            v.from_array(&data, 2).unwrap_err(),
            MathError::ArrayTooShort { offset: 2, len: 4 }
        );

        let mut out = vec![0.0; 2];
        v.write_to_array(&mut out, 1);
        assert_eq!(out, vec![0.0, 1.0, 2.0, 3.0]);

        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_buffer_attribute() {
        let attribute = BufferAttribute::new(vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0], 3);
        let mut v = Vector3::zeros();
        v.from_buffer_attribute(&attribute, 1).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        assert!(v.from_buffer_attribute(&attribute, 2).is_err());

        let uvs = BufferAttribute::new(vec![0.25, 0.75], 2);
        v.from_buffer_attribute(&uvs, 0).unwrap();
        assert_eq!(v, Vector3::new(0.25, 0.75, 0.0));
    }

    #[test]
    fn test_exact_equality() {
        let a = Vector3::new(0.1 + 0.2, 0.0, 0.0);
        let b = Vector3::new(0.3, 0.0, 0.0);
        assert_ne!(a, b);
        let copied = a;
        assert_eq!(a, copied);
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(a + b, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(a - b, Vector3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }
}
