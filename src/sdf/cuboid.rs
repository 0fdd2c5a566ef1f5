use super::SDF;
use crate::error::RenderError;
use crate::math::*;

/// Axis aligned box, exact distance. Half extents are positive along every axis.
///
/// ```compile_fail
/// use sdf_marcher::math::{Point3, Vec3};
/// use sdf_marcher::sdf::Cuboid;
///
/// let cuboid = Cuboid { center: Point3::ORIGIN, half_extents: Vec3::new(-1.0, 0.0, 1.0) };
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    center: Point3,
    half_extents: Vec3,
}

impl Cuboid {
    pub fn new(center: Point3, half_extents: Vec3) -> Result<Cuboid, RenderError> {
        if !(half_extents.min_component() > 0.0 && half_extents.is_finite()) {
            return Err(RenderError::invalid(format!(
                "cuboid half extents must be positive and finite, got {:?}",
                half_extents
            )));
        }
        if !center.is_finite() {
            return Err(RenderError::invalid("cuboid center must be finite"));
        }
        Ok(Cuboid {
            center,
            half_extents,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn half_extents(&self) -> Vec3 {
        self.half_extents
    }
}

impl SDF for Cuboid {
    fn distance(&self, p: Point3) -> f32 {
        let q = (p - self.center).abs() - self.half_extents;
        q.max_scalar(0.0).norm() + q.max_component().min(0.0)
    }
}
