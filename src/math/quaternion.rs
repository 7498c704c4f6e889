//! 四元数与欧拉角
//!
//! `Vector3::apply_quaternion` / `apply_euler` / `apply_axis_angle` 的操作数。

use super::Vector3;

/// 四元数 (x, y, z, w)，w 为实部
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// 欧拉角旋转顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerOrder {
    #[default]
    Xyz,
    Yxz,
    Zxy,
    Zyx,
    Yzx,
    Xzy,
}

/// 欧拉角（弧度）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub order: EulerOrder,
}

impl Euler {
    pub fn new(x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }
}

impl Quaternion {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// 绕单位轴 `axis` 旋转 `angle` 弧度
    pub fn from_axis_angle(axis: &Vector3, angle: f64) -> Self {
        let mut q = Self::identity();
        q.set_from_axis_angle(axis, angle);
        q
    }

    pub fn from_euler(euler: &Euler) -> Self {
        let mut q = Self::identity();
        q.set_from_euler(euler);
        q
    }

    /// `axis` 必须已归一化
    pub fn set_from_axis_angle(&mut self, axis: &Vector3, angle: f64) -> &mut Self {
        let half = angle / 2.0;
        let s = half.sin();

        self.x = axis.x * s;
        self.y = axis.y * s;
        self.z = axis.z * s;
        self.w = half.cos();
        self
    }

    pub fn set_from_euler(&mut self, euler: &Euler) -> &mut Self {
        let (s1, c1) = (euler.x / 2.0).sin_cos();
        let (s2, c2) = (euler.y / 2.0).sin_cos();
        let (s3, c3) = (euler.z / 2.0).sin_cos();

        let (x, y, z, w) = match euler.order {
            EulerOrder::Xyz => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::Yxz => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            EulerOrder::Zxy => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::Zyx => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            EulerOrder::Yzx => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::Xzy => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
        };

        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
        self
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<nalgebra::UnitQuaternion<f64>> for Quaternion {
    fn from(q: nalgebra::UnitQuaternion<f64>) -> Self {
        let c = q.into_inner().coords;
        // nalgebra 的存储顺序为 (i, j, k, w)
        Self::new(c[0], c[1], c[2], c[3])
    }
}
