use super::Film;
use crate::error::RenderError;
use crate::math::RGBColor;
use crate::profile::Profile;
use crate::vec2d::coordinates;

use rayon::prelude::*;
use rayon::ThreadPool;

/// The seam between the frame compositor and whatever runs pixels in parallel.
///
/// Implementations must call the kernel exactly once per pixel and store its color in that
/// pixel's cell and nowhere else. The kernel is pure, so the order of execution is free.
pub trait PixelExecutor {
    fn execute<K>(&self, film: &mut Film, kernel: K) -> Profile
    where
        K: Fn(usize, usize) -> (RGBColor, Profile) + Sync + Send;
}

/// Runs every pixel on the calling thread, in scanline order.
#[derive(Copy, Clone, Debug, Default)]
pub struct SerialExecutor;

impl PixelExecutor for SerialExecutor {
    fn execute<K>(&self, film: &mut Film, kernel: K) -> Profile
    where
        K: Fn(usize, usize) -> (RGBColor, Profile) + Sync + Send,
    {
        let width = film.width;
        film.buffer
            .iter_mut()
            .enumerate()
            .map(|(pixel_index, pixel_ref)| {
                let (x, y) = coordinates(width, pixel_index);
                let (color, profile) = kernel(x, y);
                *pixel_ref = color;
                profile
            })
            .fold(Profile::default(), |a, b| a.combine(b))
    }
}

/// Data parallel execution over rayon, either on the global pool or on a dedicated one.
#[derive(Default)]
pub struct RayonExecutor {
    pool: Option<ThreadPool>,
}

impl RayonExecutor {
    /// Uses rayon's global pool.
    pub fn global() -> Self {
        RayonExecutor { pool: None }
    }

    /// Builds a dedicated pool. `threads == 0` lets rayon pick.
    pub fn with_threads(threads: usize) -> Result<Self, RenderError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        Ok(RayonExecutor { pool: Some(pool) })
    }

    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

fn par_execute<K>(film: &mut Film, kernel: &K) -> Profile
where
    K: Fn(usize, usize) -> (RGBColor, Profile) + Sync + Send,
{
    let width = film.width;
    film.buffer
        .par_iter_mut()
        .enumerate()
        .map(|(pixel_index, pixel_ref)| {
            let (x, y) = coordinates(width, pixel_index);
            let (color, profile) = kernel(x, y);
            *pixel_ref = color;
            profile
        })
        .reduce(Profile::default, |a, b| a.combine(b))
}

impl PixelExecutor for RayonExecutor {
    fn execute<K>(&self, film: &mut Film, kernel: K) -> Profile
    where
        K: Fn(usize, usize) -> (RGBColor, Profile) + Sync + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(|| par_execute(film, &kernel)),
            None => par_execute(film, &kernel),
        }
    }
}
