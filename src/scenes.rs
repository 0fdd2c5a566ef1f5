//! Built-in scenes, selected by name from the render config.

use crate::error::RenderError;
use crate::lights::{AmbientLight, DirectionalLight, Falloff, LightEnum, PointLight};
use crate::math::*;
use crate::sdf::{Scene, SdfNode};

pub const SCENE_NAMES: &[&str] = &["spheres", "csg"];

pub fn load_preset(name: &str) -> Result<(Scene, Vec<LightEnum>), RenderError> {
    match name {
        "spheres" => spheres(),
        "csg" => csg(),
        _ => Err(RenderError::invalid(format!(
            "unknown scene {:?}, expected one of {:?}",
            name, SCENE_NAMES
        ))),
    }
}

/// Three tinted spheres on a ground plane under a sun and a warm point light.
pub fn spheres() -> Result<(Scene, Vec<LightEnum>), RenderError> {
    let ground = SdfNode::plane(Vec3::Y, -1.0)?.tinted(RGBColor::new(0.8, 0.8, 0.8));
    let left =
        SdfNode::sphere(Point3::new(-2.2, 0.0, -5.0), 1.0)?.tinted(RGBColor::new(0.9, 0.2, 0.2));
    let middle =
        SdfNode::sphere(Point3::new(0.0, 0.0, -5.0), 1.0)?.tinted(RGBColor::new(0.2, 0.9, 0.2));
    let right =
        SdfNode::sphere(Point3::new(2.2, 0.0, -5.0), 1.0)?.tinted(RGBColor::new(0.2, 0.2, 0.9));
    let scene = Scene::new(ground.union(left).union(middle).union(right));

    let lights: Vec<LightEnum> = vec![
        AmbientLight::new(RGBColor::WHITE, 0.1).into(),
        DirectionalLight::new(Vec3::new(-0.5, -1.0, -0.3), RGBColor::WHITE, 0.8).into(),
        PointLight::new(
            Point3::new(0.0, 3.0, -2.0),
            RGBColor::new(1.0, 0.8, 0.6),
            6.0,
            Falloff::Quadratic,
        )
        .into(),
    ];
    Ok((scene, lights))
}

/// A rounded cube (box intersected with a sphere) with a spherical bite taken out of it.
pub fn csg() -> Result<(Scene, Vec<LightEnum>), RenderError> {
    let center = Point3::new(0.0, 0.0, -4.0);
    let rounded =
        SdfNode::cuboid(center, Vec3::from(1.0))?.intersect(SdfNode::sphere(center, 1.35)?);
    let bite = SdfNode::sphere(center + Vec3::new(0.0, 0.6, 0.9), 0.7)?
        .tinted(RGBColor::new(0.9, 0.7, 0.1));
    let body = rounded.tinted(RGBColor::new(0.3, 0.5, 0.9)).subtract(bite);
    let ground = SdfNode::plane(Vec3::Y, -1.0)?;
    let scene = Scene::new(body.union(ground));

    let lights: Vec<LightEnum> = vec![
        AmbientLight::new(RGBColor::WHITE, 0.15).into(),
        PointLight::new(
            Point3::new(2.0, 3.0, -1.0),
            RGBColor::WHITE,
            3.0,
            Falloff::Linear,
        )
        .into(),
    ];
    Ok((scene, lights))
}
