//! 数学库模块
//!
//! 提供网格生成和几何运算使用的数值类型和函数。
//! 与 `nalgebra` 可以互相转换，但 API 采用原地修改、链式调用的风格。
//!
//! # 模块组织
//!
//! - **基础类型**：Vector2/3, Matrix3/4, Quaternion, Euler, Spherical, Cylindrical
//! - **常量**：PI, TAU, DEG_TO_RAD 等
//! - **工具函数**：clamp, lerp, approx_eq 等
//!
//! # 设计理念
//!
//! - 所有临时量都在栈上分配，没有跨调用共享的可变状态，可以安全地在多线程中并行使用
//! - 数值退化（除零、NaN）按 IEEE 规则传播，只有索引越界等参数错误才返回 `Err`

pub mod vector2;
pub mod vector3;
pub mod matrix;
pub mod quaternion;
pub mod spherical;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use matrix::{Matrix3, Matrix4};
pub use quaternion::{Euler, EulerOrder, Quaternion};
pub use spherical::{Cylindrical, Spherical};

/// 数学常量
pub mod constants {
    /// π
    pub const PI: f64 = std::f64::consts::PI;

    /// 2π
    pub const TAU: f64 = std::f64::consts::TAU;

    /// π/2
    pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

    /// 角度转弧度的系数
    pub const DEG_TO_RAD: f64 = PI / 180.0;

    /// 弧度转角度的系数
    pub const RAD_TO_DEG: f64 = 180.0 / PI;

    /// 浮点数比较的 epsilon
    pub const EPSILON: f64 = 1e-9;
}

/// 数学工具函数
pub mod utils {
    use super::constants;

    /// 限制值在范围内
    ///
    /// 与 `f64::clamp` 不同，不要求 `min <= max`，也不会 panic；NaN 原样返回。
    pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    /// 线性插值
    pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }

    /// 角度转弧度
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// 弧度转角度
    pub fn rad_to_deg(radians: f64) -> f64 {
        radians * constants::RAD_TO_DEG
    }

    /// 检查两个浮点数是否近似相等
    pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }
}
