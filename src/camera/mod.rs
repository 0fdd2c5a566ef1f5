mod projection;

pub use projection::Projection;

use crate::error::RenderError;
use crate::math::*;
use crate::vec2d::Vec2D;

use tracing::debug;

// below this, up is treated as parallel to the view direction
const PARALLEL_TOLERANCE: f32 = 1e-6;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Basis {
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Basis {
    fn new(position: Point3, look_at: Point3, v_up: Vec3) -> Result<Basis, RenderError> {
        let forward = (look_at - position).try_normalized().ok_or_else(|| {
            RenderError::invalid(format!(
                "camera look_at {:?} coincides with position {:?}",
                look_at, position
            ))
        })?;
        let v_up = v_up
            .try_normalized()
            .ok_or_else(|| RenderError::invalid("camera up vector must be non-zero and finite"))?;
        let right = forward.cross(v_up);
        if right.norm() < PARALLEL_TOLERANCE {
            return Err(RenderError::invalid(format!(
                "camera up vector {:?} is parallel to the view direction {:?}",
                v_up, forward
            )));
        }
        // drop any rounding leftover along forward
        let right = right.normalized();
        let right = (right - forward * (right * forward)).normalized();
        // never the raw input, so the basis stays orthonormal even for a sloppy up vector
        let up = right.cross(forward).normalized();
        Ok(Basis { forward, right, up })
    }
}

fn validate_fov(fov: f32) -> Result<f32, RenderError> {
    if fov.is_finite() && fov > 0.0 && fov < 180.0 {
        Ok(fov)
    } else {
        Err(RenderError::invalid(format!(
            "camera fov must lie in (0, 180) degrees, got {}",
            fov
        )))
    }
}

/// Pinhole camera. The basis is derived eagerly and kept in sync on every update.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: Point3,
    look_at: Point3,
    v_up: Vec3,
    // vertical field of view, in degrees
    fov: f32,
    basis: Basis,
}

impl Camera {
    pub fn new(
        position: Point3,
        look_at: Point3,
        v_up: Vec3,
        fov: f32,
    ) -> Result<Camera, RenderError> {
        let fov = validate_fov(fov)?;
        let basis = Basis::new(position, look_at, v_up)?;
        debug!(
            "constructed camera at {:?} facing {:?}, fov = {}",
            position, basis.forward, fov
        );
        Ok(Camera {
            position,
            look_at,
            v_up,
            fov,
            basis,
        })
    }

    pub fn position(&self) -> Point3 {
        self.position
    }
    pub fn look_at(&self) -> Point3 {
        self.look_at
    }
    pub fn fov(&self) -> f32 {
        self.fov
    }
    pub fn forward(&self) -> Vec3 {
        self.basis.forward
    }
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }
    /// The re-orthogonalized up vector, not the one passed in.
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    // the setters leave the camera untouched when they fail.

    pub fn set_position(&mut self, position: Point3) -> Result<(), RenderError> {
        self.basis = Basis::new(position, self.look_at, self.v_up)?;
        self.position = position;
        Ok(())
    }

    pub fn set_look_at(&mut self, look_at: Point3) -> Result<(), RenderError> {
        self.basis = Basis::new(self.position, look_at, self.v_up)?;
        self.look_at = look_at;
        Ok(())
    }

    pub fn set_up(&mut self, v_up: Vec3) -> Result<(), RenderError> {
        self.basis = Basis::new(self.position, self.look_at, v_up)?;
        self.v_up = v_up;
        Ok(())
    }

    pub fn set_fov(&mut self, fov: f32) -> Result<(), RenderError> {
        self.fov = validate_fov(fov)?;
        Ok(())
    }

    /// Per-frame ray generator for a `width` x `height` image.
    pub fn projection(&self, width: usize, height: usize) -> Result<Projection, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let aspect_ratio = width as f32 / height as f32;
        let half_height = (self.fov.to_radians() / 2.0).tan();
        let half_width = aspect_ratio * half_height;
        Ok(Projection {
            origin: self.position,
            forward: self.basis.forward,
            right: self.basis.right,
            up: self.basis.up,
            half_width,
            half_height,
            width,
            height,
        })
    }

    /// One unit direction per pixel, row 0 at the top.
    pub fn generate_rays(&self, width: usize, height: usize) -> Result<Vec2D<Vec3>, RenderError> {
        let projection = self.projection(width, height)?;
        let buffer = (0..width * height)
            .map(|index| projection.direction(index % width, index / width))
            .collect();
        Ok(Vec2D::from_buffer(width, height, buffer))
    }
}

impl Default for Camera {
    fn default() -> Self {
        let position = Point3::ORIGIN;
        let look_at = Point3::new(0.0, 0.0, -1.0);
        Camera {
            position,
            look_at,
            v_up: Vec3::Y,
            fov: 45.0,
            basis: Basis {
                forward: -Vec3::Z,
                right: Vec3::X,
                up: Vec3::Y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_vec(rng: &mut StdRng) -> Vec3 {
        Vec3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.forward(), camera.right(), camera.up());
        for v in [f, r, u] {
            assert!((v.norm() - 1.0).abs() < 1e-5, "{:?}", v);
        }
        assert!((f * r).abs() < 1e-5);
        assert!((f * u).abs() < 1e-5);
        assert!((r * u).abs() < 1e-5);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut checked = 0;
        while checked < 500 {
            let position = Point3::from(random_vec(&mut rng));
            let look_at = Point3::from(random_vec(&mut rng));
            let up = random_vec(&mut rng);
            let fov = rng.gen_range(1.0..179.0);
            if let Ok(camera) = Camera::new(position, look_at, up, fov) {
                assert_orthonormal(&camera);
                checked += 1;
            }
        }
    }

    #[test]
    fn test_sloppy_up_is_reorthogonalized() {
        let camera = Camera::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::ORIGIN,
            Vec3::new(0.0, 1.0, -0.7),
            60.0,
        )
        .unwrap();
        assert_orthonormal(&camera);
        assert!((camera.up() - Vec3::Y).norm() < 1e-6);
        assert!((camera.right() - Vec3::X).norm() < 1e-6);
    }

    #[test]
    fn test_default_matches_explicit_construction() {
        let explicit =
            Camera::new(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0), Vec3::Y, 45.0).unwrap();
        assert_eq!(explicit, Camera::default());
    }

    #[test]
    fn test_degenerate_configs_are_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let invalid =
            |r: Result<Camera, RenderError>| matches!(r, Err(RenderError::InvalidConfig(_)));
        let ahead = Point3::new(0.0, 0.0, -1.0);
        assert!(invalid(Camera::new(p, p, Vec3::Y, 45.0)));
        assert!(invalid(Camera::new(
            Point3::ORIGIN,
            Point3::new(0.0, 3.0, 0.0),
            Vec3::Y,
            45.0
        )));
        assert!(invalid(Camera::new(
            Point3::ORIGIN,
            Point3::new(0.0, -3.0, 0.0),
            Vec3::Y,
            45.0
        )));
        assert!(invalid(Camera::new(Point3::ORIGIN, ahead, Vec3::ZERO, 45.0)));
        for fov in [0.0, -10.0, 180.0, 200.0, f32::NAN] {
            assert!(invalid(Camera::new(Point3::ORIGIN, ahead, Vec3::Y, fov)));
        }
    }

    #[test]
    fn test_failed_update_leaves_camera_unchanged() {
        let mut camera = Camera::default();
        let before = camera.clone();
        assert!(camera.set_look_at(Point3::ORIGIN).is_err());
        assert!(camera.set_up(-Vec3::Z).is_err());
        assert!(camera.set_fov(0.0).is_err());
        assert!(camera.set_position(Point3::new(0.0, 0.0, -1.0)).is_err());
        assert_eq!(camera, before);

        camera.set_position(Point3::new(0.0, 0.0, 4.0)).unwrap();
        assert_eq!(camera.forward(), -Vec3::Z);
        camera.set_look_at(Point3::new(4.0, 0.0, 4.0)).unwrap();
        assert!((camera.forward() - Vec3::X).norm() < 1e-6);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_generate_rays_rejects_empty_image() {
        let camera = Camera::default();
        assert!(camera.generate_rays(0, 10).is_err());
        assert!(camera.generate_rays(10, 0).is_err());
    }

    #[test]
    fn test_center_rays_average_to_forward() {
        let camera = Camera::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-2.0, 0.5, 0.0),
            Vec3::Y,
            70.0,
        )
        .unwrap();
        for (width, height) in [(2, 2), (64, 48), (10, 30)] {
            let rays = camera.generate_rays(width, height).unwrap();
            let (cx, cy) = (width / 2, height / 2);
            let sum = rays.at(cx - 1, cy - 1)
                + rays.at(cx, cy - 1)
                + rays.at(cx - 1, cy)
                + rays.at(cx, cy);
            let mean = (sum / 4.0).normalized();
            assert!((mean - camera.forward()).norm() < 1e-5, "{:?}", mean);
        }
    }

    #[test]
    fn test_row_zero_is_top() {
        let camera = Camera::default();
        let rays = camera.generate_rays(4, 4).unwrap();
        let top_left = rays.at(0, 0);
        let bottom_right = rays.at(3, 3);
        assert!(top_left * camera.up() > 0.0);
        assert!(top_left * camera.right() < 0.0);
        assert!(bottom_right * camera.up() < 0.0);
        assert!(bottom_right * camera.right() > 0.0);
        for direction in rays.buffer.iter() {
            assert!((direction.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_fov_spans_image() {
        // a 90 degree fov puts the vertical edge of a square image at 45 degrees
        let camera =
            Camera::new(Point3::ORIGIN, Point3::new(0.0, 0.0, -1.0), Vec3::Y, 90.0).unwrap();
        let projection = camera.projection(1000, 1000).unwrap();
        let top = projection.direction(500, 0);
        let angle = (top * camera.forward()).acos().to_degrees();
        assert!((angle - 45.0).abs() < 0.1, "{}", angle);

        // wide images widen horizontally only
        let wide = camera.projection(2000, 1000).unwrap();
        assert!((wide.half_width() - 2.0 * wide.half_height()).abs() < 1e-6);
    }
}
