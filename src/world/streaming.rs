use crate::config::ChunkSysConfig;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::generator::ChunkGenerator;
use crate::world::store::World;
use glam::Vec3;
use log::info;

/// Keeps the square window of chunks around the player resident.
///
/// Reactive only: it runs when the player position is set, never on a timer.
/// Chunks that leave the window stay resident.
#[derive(Debug, Clone)]
pub struct StreamingController {
    render_distance: i32,
    center: Option<ChunkCoord>,
}

impl StreamingController {
    pub fn new(render_distance: u32) -> Self {
        Self {
            render_distance: render_distance as i32,
            center: None,
        }
    }

    pub fn from_config(config: &ChunkSysConfig) -> Self {
        Self::new(config.render_distance)
    }

    pub fn render_distance(&self) -> i32 {
        self.render_distance
    }

    /// Chunk the player stood in at the last update.
    pub fn center(&self) -> Option<ChunkCoord> {
        self.center
    }

    pub fn required_chunks(&self, center: ChunkCoord) -> Vec<ChunkCoord> {
        center.window(self.render_distance)
    }

    pub fn missing_chunks(&self, world: &World, center: ChunkCoord) -> Vec<ChunkCoord> {
        self.required_chunks(center)
            .into_iter()
            .filter(|coord| !world.is_resident(*coord))
            .collect()
    }

    /// Generates every missing chunk of the window around `player_pos` and
    /// inserts them in one replacement. Returns the world unchanged (same
    /// snapshot) when the window is already resident.
    pub fn update(
        &mut self,
        world: &World,
        player_pos: Vec3,
        generator: &mut ChunkGenerator,
    ) -> World {
        let center = ChunkCoord::from_world_pos(player_pos);
        let missing = self.missing_chunks(world, center);

        self.center = Some(center);
        if missing.is_empty() {
            return world.clone();
        }

        let batch: Vec<_> = missing
            .iter()
            .map(|coord| generator.generate(*coord))
            .collect();
        info!(
            "Streamed {} chunks around {} ({} resident)",
            batch.len(),
            center,
            world.chunk_count() + batch.len()
        );
        world.with_chunks(batch)
    }
}

impl Default for StreamingController {
    fn default() -> Self {
        Self::from_config(&ChunkSysConfig::default())
    }
}
