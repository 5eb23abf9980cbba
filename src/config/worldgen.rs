use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    /// Divisor applied to world x/z before the height sinusoids.
    pub height_scale: f64,
    pub min_height: i32,
    /// Low columns are flooded with water up to and including this y.
    pub sea_level: i32,
    /// Per-column chance of a lever on the surface.
    pub lever_chance: f64,
    /// World (x, z) column of the guaranteed crafting table in chunk (0, 0).
    pub crafting_anchor: [i32; 2],
    /// Nominal build height; not enforced by the world store.
    pub world_height: i32,
    /// Seed for surface feature placement. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            height_scale: 20.0,
            min_height: 3,
            sea_level: 5,
            lever_chance: 0.01,
            crafting_anchor: [5, 5],
            world_height: 20,
            seed: None,
        }
    }
}
