use crate::math::*;

/// Camera basis frozen for one frame at a fixed resolution.
///
/// Pixel `(x, y)` maps to
/// `u = (2 * (x + 0.5) / width - 1) * half_width` and
/// `v = (1 - 2 * (y + 0.5) / height) * half_height`, so row 0 is the top of the image.
#[derive(Copy, Clone, Debug)]
pub struct Projection {
    pub(super) origin: Point3,
    pub(super) forward: Vec3,
    pub(super) right: Vec3,
    pub(super) up: Vec3,
    pub(super) half_width: f32,
    pub(super) half_height: f32,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl Projection {
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn half_width(&self) -> f32 {
        self.half_width
    }
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    pub fn direction(&self, x: usize, y: usize) -> Vec3 {
        let u = (2.0 * ((x as f32 + 0.5) / self.width as f32) - 1.0) * self.half_width;
        let v = (1.0 - 2.0 * ((y as f32 + 0.5) / self.height as f32)) * self.half_height;
        (self.forward + u * self.right + v * self.up).normalized()
    }

    pub fn ray(&self, x: usize, y: usize) -> Ray {
        Ray::new(self.origin, self.direction(x, y))
    }
}
