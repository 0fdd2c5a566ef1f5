use crate::error::RenderError;
use crate::lights::{Light, LightEnum};
use crate::marcher::{MarchResult, MarchSettings};
use crate::math::*;
use crate::sdf::Scene;

/// Lambertian direct lighting plus a vertical sky gradient for misses.
/// No shadows, no specular, no bounces.
#[derive(Copy, Clone, Debug)]
pub struct Shader {
    settings: MarchSettings,
}

impl Shader {
    pub fn new(settings: MarchSettings) -> Result<Self, RenderError> {
        Ok(Shader {
            settings: settings.validate()?,
        })
    }

    /// Central difference gradient of the scene at `p`. Falls back to +Y where the
    /// gradient vanishes, e.g. at the exact center of a sphere.
    pub fn normal(&self, scene: &Scene, p: Point3) -> Vec3 {
        let h = self.settings.normal_epsilon;
        let dx = Vec3::new(h, 0.0, 0.0);
        let dy = Vec3::new(0.0, h, 0.0);
        let dz = Vec3::new(0.0, 0.0, h);
        let gradient = Vec3::new(
            scene.distance(p + dx) - scene.distance(p - dx),
            scene.distance(p + dy) - scene.distance(p - dy),
            scene.distance(p + dz) - scene.distance(p - dz),
        );
        gradient.try_normalized().unwrap_or(Vec3::Y)
    }

    pub fn background(&self, direction: Vec3) -> RGBColor {
        let t = clamp(direction.y * 0.5 + 0.5, 0.0, 1.0);
        lerp(
            self.settings.background_bottom,
            self.settings.background_top,
            t,
        )
    }

    /// Sum of every light's diffuse contribution at `point`.
    pub fn illuminate(&self, lights: &[LightEnum], point: Point3, normal: Vec3) -> RGBColor {
        lights.iter().fold(RGBColor::BLACK, |sum, light| {
            sum + light.illuminate(point, normal, self.settings.epsilon)
        })
    }

    /// Linear color for the outcome of marching `ray`.
    pub fn shade(
        &self,
        scene: &Scene,
        lights: &[LightEnum],
        ray: Ray,
        result: &MarchResult,
    ) -> RGBColor {
        match *result {
            MarchResult::Hit { point, .. } => {
                let normal = self.normal(scene, point);
                scene.albedo(point) * self.illuminate(lights, point, normal)
            }
            MarchResult::Miss { .. } => self.background(ray.direction),
        }
    }

    /// Display space color, ready to be stored.
    pub fn resolve(
        &self,
        scene: &Scene,
        lights: &[LightEnum],
        ray: Ray,
        result: &MarchResult,
    ) -> RGBColor {
        gamma_correct(self.shade(scene, lights, ray, result))
    }
}
