pub use crate::camera::{Camera, Projection};
pub use crate::error::RenderError;
pub use crate::lights::{AmbientLight, DirectionalLight, Falloff, Light, LightEnum, PointLight};
pub use crate::marcher::{MarchResult, MarchSettings, MissReason, RayMarcher};
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::renderer::{
    Film, FrameCompositor, PixelExecutor, RayonExecutor, RenderOutput, SerialExecutor,
};
pub use crate::sdf::{Cuboid, Plane, Scene, SdfNode, Sphere, SDF};
pub use crate::shading::Shader;
pub use crate::vec2d::Vec2D;
