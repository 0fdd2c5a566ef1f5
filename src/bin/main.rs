extern crate sdf_marcher as root;

use root::math::RGBColor;
use root::parsing::config::Config;
use root::parsing::get_settings;
use root::renderer::{Film, FrameCompositor, RayonExecutor};
use root::scenes::load_preset;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn to_rgb8(color: RGBColor) -> [u8; 3] {
    color
        .to_array()
        .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn output_film(config: &Config, film: &Film) -> anyhow::Result<PathBuf> {
    let filename = config
        .render
        .filename
        .clone()
        .unwrap_or_else(|| String::from("beauty"));
    fs::create_dir_all("output").context("failed to create output directory")?;
    let png_filename = PathBuf::from(format!("output/{}.png", filename));

    let width = u32::try_from(film.width).context("film too wide for png output")?;
    let height = u32::try_from(film.height).context("film too tall for png output")?;
    let image = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb(to_rgb8(film.at(x as usize, y as usize)))
    });
    image
        .save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename.to_string_lossy()))?;
    Ok(png_filename)
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = get_settings(&opts.config_file)?;
    let (scene, lights) = load_preset(&config.render.scene)?;
    let compositor = FrameCompositor::new(config.march)?;
    let executor = RayonExecutor::with_threads(config.render.threads.unwrap_or(0) as usize)?;
    info!(
        "rendering scene {:?} with {} threads",
        config.render.scene,
        executor.threads()
    );

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let resolution = config.render.resolution;
    let output = compositor.render_with(
        &executor,
        &config.camera,
        &scene,
        &lights,
        resolution.width,
        resolution.height,
    )?;
    let path = output_film(&config, &output.film)?;
    info!("wrote {}", path.to_string_lossy());
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
