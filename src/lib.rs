//! Sphere tracing renderer core: camera rays, signed distance scenes, direct lighting.

pub mod camera;
pub mod error;
pub mod lights;
pub mod marcher;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod scenes;
pub mod sdf;
pub mod shading;
pub mod vec2d;
