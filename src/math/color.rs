use super::clamp;

use std::ops::{Add, AddAssign, Div, Mul, Sub};

use serde::Deserialize;

pub const GAMMA: f32 = 2.2;

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "[f32; 3]")]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
        RGBColor::new(f(self.r), f(self.g), f(self.b))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(c: [f32; 3]) -> Self {
        RGBColor::new(c[0], c[1], c[2])
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Sub for RGBColor {
    type Output = RGBColor;
    fn sub(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

// channelwise
impl Mul for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        self.map(|c| c * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Div<f32> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f32) -> RGBColor {
        self.map(|c| c / other)
    }
}

pub fn lerp(a: RGBColor, b: RGBColor, t: f32) -> RGBColor {
    a + (b - a) * t
}

/// Converts linear color to display space: each channel is clamped to [0, 1] and raised to 1/2.2.
pub fn gamma_correct(color: RGBColor) -> RGBColor {
    color.map(|c| clamp(c, 0.0, 1.0).powf(1.0 / GAMMA))
}

pub fn inverse_gamma_correct(color: RGBColor) -> RGBColor {
    color.map(|c| clamp(c, 0.0, 1.0).powf(GAMMA))
}
