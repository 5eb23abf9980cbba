use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Distance of the sun from the origin as seen by the sky.
const SUN_RADIUS: f32 = 100.0;
const SUN_DEPTH: f32 = 50.0;

/// Time of day as a fraction of a full cycle, always in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldClock {
    time: f32,
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::at(0.1)
    }
}

impl WorldClock {
    pub fn at(time: f32) -> Self {
        let time = time.rem_euclid(1.0);
        // rem_euclid rounds tiny negatives up to exactly 1.0
        Self {
            time: if time >= 1.0 { 0.0 } else { time },
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn advanced(&self, dt: f32, day_length_secs: f32) -> Self {
        if day_length_secs <= 0.0 {
            return *self;
        }
        Self::at(self.time + dt / day_length_secs)
    }

    pub fn is_night(&self) -> bool {
        self.time < 0.3 || self.time > 0.7
    }

    pub fn sun_position(&self) -> Vec3 {
        let angle = self.time * TAU;
        Vec3::new(angle.cos() * SUN_RADIUS, angle.sin() * SUN_RADIUS, SUN_DEPTH)
    }
}
