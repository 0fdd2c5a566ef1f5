use crate::camera::Camera;
use crate::error::RenderError;
use crate::math::*;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct CameraData {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    pub v_up: Option<[f32; 3]>, // defaults to 0,1,0
    pub vfov: f32,              // in degrees, should be in (0, 180)
}

impl TryFrom<CameraData> for Camera {
    type Error = RenderError;
    fn try_from(data: CameraData) -> Result<Self, Self::Error> {
        Camera::new(
            Point3::from(data.look_from),
            Point3::from(data.look_at),
            Vec3::from(data.v_up.unwrap_or([0.0, 1.0, 0.0])),
            data.vfov,
        )
    }
}
