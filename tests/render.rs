use sdf_marcher::prelude::*;
use sdf_marcher::scenes::{load_preset, SCENE_NAMES};

fn sphere_scene() -> (Camera, Scene, Vec<LightEnum>) {
    let camera = Camera::new(Point3::new(0.0, 0.0, 5.0), Point3::ORIGIN, Vec3::Y, 40.0).unwrap();
    let scene = Scene::new(SdfNode::sphere(Point3::ORIGIN, 1.0).unwrap());
    let lights: Vec<LightEnum> = vec![
        AmbientLight::new(RGBColor::WHITE, 0.1).into(),
        DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0), RGBColor::WHITE, 0.6).into(),
    ];
    (camera, scene, lights)
}

#[test]
fn test_center_pixel_hits_and_corner_shows_sky() {
    let (camera, scene, lights) = sphere_scene();
    let compositor = FrameCompositor::new(MarchSettings::default()).unwrap();
    let output = compositor
        .render_with(&SerialExecutor, &camera, &scene, &lights, 32, 32)
        .unwrap();

    // head-on, full ambient plus directional
    let center = output.film.at(16, 16);
    let expected = gamma_correct(RGBColor::WHITE * 0.7);
    assert!((center.r - expected.r).abs() < 1e-2, "{:?}", center);

    // the corner ray misses and gets the gamma corrected sky gradient
    let projection = camera.projection(32, 32).unwrap();
    let direction = projection.direction(0, 0);
    let settings = MarchSettings::default();
    let t = clamp(direction.y * 0.5 + 0.5, 0.0, 1.0);
    let sky = gamma_correct(lerp(settings.background_bottom, settings.background_top, t));
    assert_eq!(output.film.at(0, 0), sky);

    assert_eq!(output.profile.camera_rays, 32 * 32);
    assert!(output.profile.hits > 0);
    assert!(output.profile.distance_misses > 0);
    assert_eq!(output.profile.step_misses, 0);
}

#[test]
fn test_output_is_display_range() {
    for name in SCENE_NAMES {
        let (scene, lights) = load_preset(name).unwrap();
        let camera = Camera::new(
            Point3::new(0.0, 1.0, 2.0),
            Point3::new(0.0, 0.0, -5.0),
            Vec3::Y,
            50.0,
        )
        .unwrap();
        let compositor = FrameCompositor::new(MarchSettings::default()).unwrap();
        let film = compositor.render(&camera, &scene, &lights, 40, 24).unwrap();
        assert_eq!(film.buffer.len(), 40 * 24);
        for color in film.buffer.iter() {
            for c in color.to_array() {
                assert!((0.0..=1.0).contains(&c), "{} out of range in {}", c, name);
            }
        }
    }
}

#[test]
fn test_render_is_deterministic_across_executors() {
    let (scene, lights) = load_preset("csg").unwrap();
    let camera = Camera::new(
        Point3::new(1.5, 1.0, 0.5),
        Point3::new(0.0, 0.0, -4.0),
        Vec3::Y,
        45.0,
    )
    .unwrap();
    let compositor = FrameCompositor::new(MarchSettings::default()).unwrap();
    let (width, height) = (48, 27);

    let serial = compositor
        .render_with(&SerialExecutor, &camera, &scene, &lights, width, height)
        .unwrap();
    for threads in [1, 2, 4, 7] {
        let executor = RayonExecutor::with_threads(threads).unwrap();
        let parallel = compositor
            .render_with(&executor, &camera, &scene, &lights, width, height)
            .unwrap();
        assert_eq!(serial.film, parallel.film, "{} threads", threads);
        assert_eq!(serial.profile, parallel.profile);
    }
    let global = compositor
        .render(&camera, &scene, &lights, width, height)
        .unwrap();
    assert_eq!(serial.film, global);
}

#[test]
fn test_independently_configured_compositors() {
    let (camera, scene, lights) = sphere_scene();
    let night = MarchSettings {
        background_top: RGBColor::new(0.0, 0.0, 0.1),
        background_bottom: RGBColor::BLACK,
        ..Default::default()
    };
    let day = FrameCompositor::new(MarchSettings::default()).unwrap();
    let night = FrameCompositor::new(night).unwrap();
    let day_film = day.render(&camera, &scene, &lights, 8, 8).unwrap();
    let night_film = night.render(&camera, &scene, &lights, 8, 8).unwrap();
    // sky differs, the sphere in the middle does not
    assert_ne!(day_film.at(0, 0), night_film.at(0, 0));
    assert_eq!(day_film.at(4, 4), night_film.at(4, 4));
}

#[test]
fn test_zero_sized_frame_is_rejected() {
    let (camera, scene, lights) = sphere_scene();
    let compositor = FrameCompositor::new(MarchSettings::default()).unwrap();
    assert!(matches!(
        compositor.render(&camera, &scene, &lights, 0, 10),
        Err(RenderError::InvalidConfig(_))
    ));
}
