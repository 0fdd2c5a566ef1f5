use super::SDF;
use crate::error::RenderError;
use crate::math::*;

/// Infinite plane `dot(p, normal) == offset`. Positive distances lie on the normal's side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    normal: Vec3,
    offset: f32,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f32) -> Result<Plane, RenderError> {
        let normal = normal
            .try_normalized()
            .ok_or_else(|| RenderError::invalid("plane normal must be non-zero and finite"))?;
        if !offset.is_finite() {
            return Err(RenderError::invalid("plane offset must be finite"));
        }
        Ok(Plane { normal, offset })
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl SDF for Plane {
    fn distance(&self, p: Point3) -> f32 {
        Vec3::from(p) * self.normal - self.offset
    }
}
