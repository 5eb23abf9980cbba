use crate::config::WorldGenConfig;
use crate::world::block::BlockType;
use crate::world::block_pos::BlockPos;
use crate::world::chunk::Chunk;
use crate::world::chunk_coord::{ChunkCoord, CHUNK_SIZE};
use crate::world::generator::height::HeightMap;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Layers of dirt between the stone and the surface block.
const DIRT_DEPTH: i32 = 2;

/// Synthesizes chunk content: layered terrain, flooded lowlands and sparse
/// surface features.
///
/// Lever placement draws from one RNG stream shared by every chunk this
/// generator produces, so the levers in a chunk depend on generation order.
/// Terrain, water and the crafting-table anchor do not.
pub struct ChunkGenerator {
    config: WorldGenConfig,
    height_map: HeightMap,
    rng: ChaCha12Rng,
}

impl ChunkGenerator {
    pub fn new(config: WorldGenConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };
        Self {
            height_map: HeightMap::from_config(&config),
            config,
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(WorldGenConfig {
            seed: Some(seed),
            ..WorldGenConfig::default()
        })
    }

    pub fn height_map(&self) -> HeightMap {
        self.height_map
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    pub fn generate(&mut self, coord: ChunkCoord) -> Chunk {
        let mut chunk = Chunk::new(coord);
        let (origin_x, origin_z) = coord.origin();

        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                self.generate_column(&mut chunk, origin_x + x, origin_z + z);
            }
        }

        debug!("Generated chunk {} with {} blocks", coord, chunk.len());
        chunk
    }

    fn generate_column(&mut self, chunk: &mut Chunk, world_x: i32, world_z: i32) {
        let h = self.height_map.height(world_x, world_z);
        let low = h < self.config.sea_level;

        for y in 0..h {
            let block = if y < h - DIRT_DEPTH {
                BlockType::Stone
            } else {
                BlockType::Dirt
            };
            chunk.set(BlockPos::new(world_x, y, world_z), block);
        }

        let surface = if low { BlockType::Sand } else { BlockType::Grass };
        chunk.set(BlockPos::new(world_x, h, world_z), surface);

        let above = BlockPos::new(world_x, h + 1, world_z);
        if self.rng.gen_bool(self.config.lever_chance.clamp(0.0, 1.0)) {
            chunk.set(above, BlockType::LEVER);
        }

        if low {
            for y in h + 1..=self.config.sea_level {
                chunk.set(BlockPos::new(world_x, y, world_z), BlockType::Water);
            }
        }

        let [anchor_x, anchor_z] = self.config.crafting_anchor;
        if chunk.coord() == ChunkCoord::new(0, 0) && world_x == anchor_x && world_z == anchor_z {
            chunk.set(above, BlockType::CraftingTable);
        }
    }
}
