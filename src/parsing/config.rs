use super::cameras::CameraData;
use crate::camera::Camera;
use crate::error::RenderError;
use crate::marcher::MarchSettings;

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub threads: Option<u16>,
    pub scene: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub render: RenderSettings,
    pub camera: CameraData,
    #[serde(default)]
    pub march: MarchSettings,
}

/// Validated runtime configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub render: RenderSettings,
    pub camera: Camera,
    pub march: MarchSettings,
}

impl TryFrom<TOMLConfig> for Config {
    type Error = RenderError;
    fn try_from(data: TOMLConfig) -> Result<Self, Self::Error> {
        let Resolution { width, height } = data.render.resolution;
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "resolution must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Config {
            camera: Camera::try_from(data.camera)?,
            march: data.march.validate()?,
            render: data.render,
        })
    }
}
