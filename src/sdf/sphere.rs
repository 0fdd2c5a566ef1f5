use super::SDF;
use crate::error::RenderError;
use crate::math::*;

/// Only constructible through [`Sphere::new`], so the radius is always positive.
///
/// ```compile_fail
/// use sdf_marcher::math::Point3;
/// use sdf_marcher::sdf::Sphere;
///
/// let sphere = Sphere { center: Point3::ORIGIN, radius: -1.0 };
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Result<Sphere, RenderError> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(RenderError::invalid(format!(
                "sphere radius must be positive and finite, got {}",
                radius
            )));
        }
        if !center.is_finite() {
            return Err(RenderError::invalid("sphere center must be finite"));
        }
        Ok(Sphere { center, radius })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl SDF for Sphere {
    fn distance(&self, p: Point3) -> f32 {
        (p - self.center).norm() - self.radius
    }
}
