mod executor;

pub use executor::{PixelExecutor, RayonExecutor, SerialExecutor};

use crate::camera::Camera;
use crate::error::RenderError;
use crate::lights::LightEnum;
use crate::marcher::{MarchSettings, RayMarcher};
use crate::math::RGBColor;
use crate::profile::Profile;
use crate::sdf::Scene;
use crate::shading::Shader;
use crate::vec2d::Vec2D;

use std::time::Instant;

use tracing::{debug, info};

/// Display space colors, row 0 at the top.
pub type Film = Vec2D<RGBColor>;

pub struct RenderOutput {
    pub film: Film,
    pub profile: Profile,
}

/// Drives camera → marcher → shader independently for every pixel of a frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameCompositor {
    marcher: RayMarcher,
    shader: Shader,
}

impl FrameCompositor {
    pub fn new(settings: MarchSettings) -> Result<Self, RenderError> {
        Ok(FrameCompositor {
            marcher: RayMarcher::new(settings)?,
            shader: Shader::new(settings)?,
        })
    }

    pub fn marcher(&self) -> &RayMarcher {
        &self.marcher
    }

    pub fn shader(&self) -> &Shader {
        &self.shader
    }

    /// Renders on rayon's global pool.
    pub fn render(
        &self,
        camera: &Camera,
        scene: &Scene,
        lights: &[LightEnum],
        width: usize,
        height: usize,
    ) -> Result<Film, RenderError> {
        self.render_with(&RayonExecutor::global(), camera, scene, lights, width, height)
            .map(|output| output.film)
    }

    pub fn render_with<E: PixelExecutor>(
        &self,
        executor: &E,
        camera: &Camera,
        scene: &Scene,
        lights: &[LightEnum],
        width: usize,
        height: usize,
    ) -> Result<RenderOutput, RenderError> {
        let projection = camera.projection(width, height)?;
        info!("starting render with film resolution {}x{}", width, height);
        debug!(
            "scene depth {}, {} lights",
            scene.root().depth(),
            lights.len()
        );

        let now = Instant::now();
        let mut film = Film::new(width, height, RGBColor::BLACK);
        let profile = executor.execute(&mut film, |x, y| {
            let ray = projection.ray(x, y);
            let result = self.marcher.march(scene, ray);
            let color = self.shader.resolve(scene, lights, ray, &result);
            debug_assert!(color.is_finite(), "{:?} at ({}, {})", color, x, y);
            (color, Profile::from_result(&result))
        });

        let elapsed = now.elapsed().as_secs_f32();
        info!("took {}s", elapsed);
        profile.log_summary(elapsed);
        Ok(RenderOutput { film, profile })
    }
}
