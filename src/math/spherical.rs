//! 球坐标与柱坐标
//!
//! 约定与 Y 轴向上的右手系一致：`phi` 为与 +Y 轴的极角，`theta` 为绕 Y 轴的方位角，
//! 从 +Z 轴开始朝 +X 轴方向增加。

/// 球坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    /// 极角（弧度）
    pub phi: f64,
    /// 方位角（弧度）
    pub theta: f64,
}

/// 柱坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    /// 到 Y 轴的距离
    pub radius: f64,
    /// 方位角（弧度）
    pub theta: f64,
    /// 沿 Y 轴的高度
    pub y: f64,
}

impl Spherical {
    pub fn new(radius: f64, phi: f64, theta: f64) -> Self {
        Self { radius, phi, theta }
    }
}

impl Cylindrical {
    pub fn new(radius: f64, theta: f64, y: f64) -> Self {
        Self { radius, theta, y }
    }
}

impl Default for Spherical {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

impl Default for Cylindrical {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}
