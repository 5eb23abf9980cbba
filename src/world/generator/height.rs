use crate::config::WorldGenConfig;

/// Seed-free surface height function.
///
/// Two sinusoids at different frequencies over the scaled world position,
/// remapped from `[-1.5, 1.5]` onto `[0, 15]` and floored. The result
/// is never below `min_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightMap {
    scale: f64,
    min_height: i32,
}

impl HeightMap {
    pub fn new(scale: f64, min_height: i32) -> Self {
        Self { scale, min_height }
    }

    pub fn from_config(config: &WorldGenConfig) -> Self {
        Self::new(config.height_scale, config.min_height)
    }

    /// Troughs where the remapped sum would floor below zero (such as
    /// `(-31, 0)`) are raised to `min_height`.
    pub fn height(&self, world_x: i32, world_z: i32) -> i32 {
        let nx = world_x as f64 / self.scale;
        let nz = world_z as f64 / self.scale;
        let noise = nx.sin() * nz.cos() + (nx * 0.5).sin() * 0.5;
        ((noise + 1.0) * 6.0).floor().max(0.0) as i32 + self.min_height
    }
}

impl Default for HeightMap {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

/// Surface height with the default terrain parameters.
pub fn height(world_x: i32, world_z: i32) -> i32 {
    HeightMap::default().height(world_x, world_z)
}
