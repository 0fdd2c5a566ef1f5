use crate::error::RenderError;
use crate::math::*;
use crate::sdf::Scene;

use serde::Deserialize;

/// Tolerances and limits shared by the marcher and the shader.
///
/// Immutable once handed to a [`RayMarcher`] or [`crate::shading::Shader`], so several
/// differently configured renderers can coexist.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarchSettings {
    /// A march stops with a hit once the distance estimate drops below this.
    pub epsilon: f32,
    pub max_steps: usize,
    pub max_distance: f32,
    /// Offset used for the central difference normal estimate.
    pub normal_epsilon: f32,
    pub background_top: RGBColor,
    pub background_bottom: RGBColor,
}

impl Default for MarchSettings {
    fn default() -> Self {
        MarchSettings {
            epsilon: 1e-4,
            max_steps: 1000,
            max_distance: 1000.0,
            normal_epsilon: 1e-3,
            background_top: RGBColor::new(0.6, 0.8, 1.0),
            background_bottom: RGBColor::new(1.0, 1.0, 1.0),
        }
    }
}

impl MarchSettings {
    pub fn validate(self) -> Result<Self, RenderError> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(RenderError::invalid(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        if !(self.normal_epsilon > 0.0 && self.normal_epsilon.is_finite()) {
            return Err(RenderError::invalid(format!(
                "normal_epsilon must be positive, got {}",
                self.normal_epsilon
            )));
        }
        if self.max_steps == 0 {
            return Err(RenderError::invalid("max_steps must be at least 1"));
        }
        if self.max_distance.is_nan() || self.max_distance <= self.epsilon {
            return Err(RenderError::invalid(format!(
                "max_distance must exceed epsilon, got {}",
                self.max_distance
            )));
        }
        if !(self.background_top.is_finite() && self.background_bottom.is_finite()) {
            return Err(RenderError::invalid("background colors must be finite"));
        }
        Ok(self)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MissReason {
    /// The next step would carry the ray past `max_distance`.
    Distance,
    /// The step budget ran out before the ray converged.
    Steps,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchResult {
    Hit {
        point: Point3,
        // distance travelled along the ray
        distance: f32,
        steps: usize,
    },
    Miss {
        reason: MissReason,
        steps: usize,
    },
}

impl MarchResult {
    pub fn steps(&self) -> usize {
        match self {
            MarchResult::Hit { steps, .. } | MarchResult::Miss { steps, .. } => *steps,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, MarchResult::Hit { .. })
    }
}

/// Sphere tracer. Advancing by the distance estimate is only sound because every
/// [`crate::sdf::SdfNode`] is a lower bound on the true distance.
#[derive(Copy, Clone, Debug)]
pub struct RayMarcher {
    settings: MarchSettings,
}

impl RayMarcher {
    pub fn new(settings: MarchSettings) -> Result<Self, RenderError> {
        Ok(RayMarcher {
            settings: settings.validate()?,
        })
    }

    pub fn settings(&self) -> &MarchSettings {
        &self.settings
    }

    /// Resolves `ray` against `scene`. Bounded by `max_steps` iterations, never fails.
    pub fn march(&self, scene: &Scene, ray: Ray) -> MarchResult {
        let MarchSettings {
            epsilon,
            max_steps,
            max_distance,
            ..
        } = self.settings;

        let mut time = 0.0;
        let mut step = 0;
        loop {
            let point = ray.point_at_parameter(time);
            let distance = scene.distance(point);
            if distance < epsilon {
                return MarchResult::Hit {
                    point,
                    distance: time,
                    steps: step,
                };
            }
            // a NaN estimate is treated as escaping
            if distance.is_nan() || time + distance > max_distance {
                return MarchResult::Miss {
                    reason: MissReason::Distance,
                    steps: step,
                };
            }
            if step + 1 >= max_steps {
                return MarchResult::Miss {
                    reason: MissReason::Steps,
                    steps: step,
                };
            }
            time += distance;
            step += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdf::SdfNode;

    fn unit_sphere() -> Scene {
        Scene::new(SdfNode::sphere(Point3::ORIGIN, 1.0).unwrap())
    }

    fn marcher() -> RayMarcher {
        RayMarcher::new(MarchSettings::default()).unwrap()
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), -Vec3::Z);
        match marcher().march(&unit_sphere(), ray) {
            MarchResult::Hit {
                point,
                distance,
                steps,
            } => {
                assert!((point - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-3, "{:?}", point);
                assert!((distance - 4.0).abs() < 1e-3);
                assert!(steps <= MarchSettings::default().max_steps);
            }
            other => panic!("expected hit, got {:?}", other),
        }
    }

    #[test]
    fn test_grazing_hit_converges() {
        // skims the sphere at a shallow angle, needs many small steps
        let direction = (Point3::new(0.0, 0.999, 0.0) - Point3::new(0.0, 1.0, 6.0)).normalized();
        let ray = Ray::new(Point3::new(0.0, 1.0, 6.0), direction);
        let result = marcher().march(&unit_sphere(), ray);
        assert!(result.is_hit(), "{:?}", result);
        assert!(result.steps() > 3);
    }

    #[test]
    fn test_miss_by_distance() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(matches!(
            marcher().march(&unit_sphere(), ray),
            MarchResult::Miss {
                reason: MissReason::Distance,
                ..
            }
        ));
    }

    #[test]
    fn test_miss_by_steps() {
        let settings = MarchSettings {
            max_steps: 4,
            ..Default::default()
        };
        let marcher = RayMarcher::new(settings).unwrap();
        // parallel to a plane just above it: the estimate never shrinks below epsilon
        // and the ray never leaves max_distance in four steps
        let scene = Scene::new(SdfNode::plane(Vec3::Y, 0.0).unwrap());
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::X);
        assert_eq!(
            marcher.march(&scene, ray),
            MarchResult::Miss {
                reason: MissReason::Steps,
                steps: 3
            }
        );
    }

    #[test]
    fn test_origin_inside_surface_hits_immediately() {
        let ray = Ray::new(Point3::ORIGIN, Vec3::X);
        assert_eq!(
            marcher().march(&unit_sphere(), ray),
            MarchResult::Hit {
                point: Point3::ORIGIN,
                distance: 0.0,
                steps: 0
            }
        );
    }

    #[test]
    fn test_every_ray_terminates_within_budget() {
        let settings = MarchSettings {
            max_steps: 64,
            ..Default::default()
        };
        let marcher = RayMarcher::new(settings).unwrap();
        let scene = Scene::new(
            SdfNode::sphere(Point3::ORIGIN, 1.0)
                .unwrap()
                .union(SdfNode::plane(Vec3::Y, -1.0).unwrap()),
        );
        for i in 0..32 {
            let angle = i as f32 / 32.0 * std::f32::consts::TAU;
            let ray = Ray::new(
                Point3::new(0.0, 0.5, 4.0),
                Vec3::new(angle.cos(), 0.3 * angle.sin(), -1.0).normalized(),
            );
            assert!(marcher.march(&scene, ray).steps() < 64);
        }
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let bad = [
            MarchSettings {
                epsilon: 0.0,
                ..Default::default()
            },
            MarchSettings {
                normal_epsilon: -1.0,
                ..Default::default()
            },
            MarchSettings {
                max_steps: 0,
                ..Default::default()
            },
            MarchSettings {
                max_distance: 0.0,
                ..Default::default()
            },
        ];
        for settings in bad {
            assert!(matches!(
                RayMarcher::new(settings),
                Err(RenderError::InvalidConfig(_))
            ));
        }
    }
}
