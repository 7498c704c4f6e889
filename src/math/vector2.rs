//! 二维向量
//!
//! 网格生成时用于计算 UV 坐标。

/// 二维向量 (x, y)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn add(&mut self, v: &Vector2) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    pub fn sub(&mut self, v: &Vector2) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    pub fn add_scalar(&mut self, s: f64) -> &mut Self {
        self.x += s;
        self.y += s;
        self
    }

    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    pub fn divide_scalar(&mut self, scalar: f64) -> &mut Self {
        self.multiply_scalar(1.0 / scalar)
    }

    pub fn dot(&self, v: &Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn lerp(&mut self, v: &Vector2, alpha: f64) -> &mut Self {
        self.x += (v.x - self.x) * alpha;
        self.y += (v.y - self.y) * alpha;
        self
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// 转换为 GPU 使用的 f32 数组
    pub fn to_f32_array(&self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(a: [f64; 2]) -> Self {
        Vector2::new(a[0], a[1])
    }
}
