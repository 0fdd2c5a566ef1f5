use crate::math::*;

use tracing::warn;

/// Used when a directional light is authored with a zero length direction.
pub const DEFAULT_LIGHT_DIRECTION: Vec3 = Vec3::Y;

pub trait Light {
    /// Lambertian contribution of this light at `point` on a surface with unit `normal`.
    /// `epsilon` is the distance below which a point light is considered coincident with the point.
    fn illuminate(&self, point: Point3, normal: Vec3, epsilon: f32) -> RGBColor;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Falloff {
    None,
    Linear,
    Quadratic,
}

impl Falloff {
    /// Plain inverse law. It exceeds 1 for lights closer than one unit; point lights only
    /// substitute 1 once the light is within `epsilon` of the shaded point.
    pub fn attenuation(&self, distance: f32) -> f32 {
        match self {
            Falloff::None => 1.0,
            Falloff::Linear => 1.0 / distance,
            Falloff::Quadratic => 1.0 / (distance * distance),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: RGBColor,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(color: RGBColor, intensity: f32) -> Self {
        AmbientLight { color, intensity }
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        AmbientLight::new(RGBColor::WHITE, 0.1)
    }
}

impl Light for AmbientLight {
    fn illuminate(&self, _point: Point3, _normal: Vec3, _epsilon: f32) -> RGBColor {
        self.color * self.intensity
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    // direction the light travels in, unit length
    direction: Vec3,
    pub color: RGBColor,
    pub intensity: f32,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, color: RGBColor, intensity: f32) -> Self {
        let direction = match direction.try_normalized() {
            Some(direction) => direction,
            None => {
                warn!(
                    "directional light direction {:?} cannot be normalized, falling back to {:?}",
                    direction, DEFAULT_LIGHT_DIRECTION
                );
                DEFAULT_LIGHT_DIRECTION
            }
        };
        DirectionalLight {
            direction,
            color,
            intensity,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        DirectionalLight::new(-Vec3::Y, RGBColor::WHITE, 1.0)
    }
}

impl Light for DirectionalLight {
    fn illuminate(&self, _point: Point3, normal: Vec3, _epsilon: f32) -> RGBColor {
        let cos = (normal * -self.direction).max(0.0);
        self.color * (cos * self.intensity)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub color: RGBColor,
    pub intensity: f32,
    pub falloff: Falloff,
}

impl PointLight {
    pub fn new(position: Point3, color: RGBColor, intensity: f32, falloff: Falloff) -> Self {
        PointLight {
            position,
            color,
            intensity,
            falloff,
        }
    }
}

impl Light for PointLight {
    fn illuminate(&self, point: Point3, normal: Vec3, epsilon: f32) -> RGBColor {
        let to_light = self.position - point;
        let distance = to_light.norm();
        // coincident with the surface point: treat as head-on and unattenuated
        let (cos, attenuation) = if distance < epsilon {
            (1.0, 1.0)
        } else {
            (
                (normal * (to_light / distance)).max(0.0),
                self.falloff.attenuation(distance),
            )
        };
        self.color * (cos * self.intensity * attenuation)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightEnum {
    Ambient(AmbientLight),
    Directional(DirectionalLight),
    Point(PointLight),
}

impl From<AmbientLight> for LightEnum {
    fn from(value: AmbientLight) -> Self {
        LightEnum::Ambient(value)
    }
}

impl From<DirectionalLight> for LightEnum {
    fn from(value: DirectionalLight) -> Self {
        LightEnum::Directional(value)
    }
}

impl From<PointLight> for LightEnum {
    fn from(value: PointLight) -> Self {
        LightEnum::Point(value)
    }
}

impl Light for LightEnum {
    fn illuminate(&self, point: Point3, normal: Vec3, epsilon: f32) -> RGBColor {
        match self {
            LightEnum::Ambient(inner) => inner.illuminate(point, normal, epsilon),
            LightEnum::Directional(inner) => inner.illuminate(point, normal, epsilon),
            LightEnum::Point(inner) => inner.illuminate(point, normal, epsilon),
        }
    }
}
