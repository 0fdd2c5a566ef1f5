use crate::marcher::{MarchResult, MissReason};

use tracing::info;

/// Per-frame march statistics, accumulated per pixel and reduced across the frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,
    pub hits: usize,
    pub distance_misses: usize,
    pub step_misses: usize,
    // total sphere tracing iterations over every ray
    pub march_steps: usize,
}

impl Profile {
    pub fn new(
        camera_rays: usize,
        hits: usize,
        distance_misses: usize,
        step_misses: usize,
        march_steps: usize,
    ) -> Self {
        Profile {
            camera_rays,
            hits,
            distance_misses,
            step_misses,
            march_steps,
        }
    }

    pub fn from_result(result: &MarchResult) -> Self {
        let steps = result.steps();
        match result {
            MarchResult::Hit { .. } => Profile::new(1, 1, 0, 0, steps),
            MarchResult::Miss {
                reason: MissReason::Distance,
                ..
            } => Profile::new(1, 0, 1, 0, steps),
            MarchResult::Miss {
                reason: MissReason::Steps,
                ..
            } => Profile::new(1, 0, 0, 1, steps),
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.hits + other.hits,
            self.distance_misses + other.distance_misses,
            self.step_misses + other.step_misses,
            self.march_steps + other.march_steps,
        )
    }

    pub fn average_steps(&self) -> f32 {
        if self.camera_rays == 0 {
            0.0
        } else {
            self.march_steps as f32 / self.camera_rays as f32
        }
    }

    pub fn log_summary(&self, elapsed: f32) {
        info!(
            "{} camera rays at {} per second",
            self.camera_rays,
            self.camera_rays as f32 / elapsed
        );
        info!(
            "{} hits, {} misses by distance, {} misses by step budget",
            self.hits, self.distance_misses, self.step_misses
        );
        info!(
            "{} march steps, {} per ray on average",
            self.march_steps,
            self.average_steps()
        );
    }
}
