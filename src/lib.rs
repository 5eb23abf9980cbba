pub mod config;
pub mod crafting;
pub mod engine;
pub mod environment;
pub mod oracle;
pub mod player;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::{ChunkSysConfig, EngineConfig, GameplayConfig, WorldGenConfig};
pub use crafting::{CraftingError, Recipe, RECIPES};
pub use engine::{EngineStats, GameState, VoxelEngine};
pub use environment::{Weather, WorldClock};
pub use oracle::{ask_oracle, AdviceError, AdviceService};
pub use player::{GameMode, Inventory, Mob, MobKind, PlayerInput, PlayerState};
pub use utils::error::{InventoryError, KeyError};
pub use world::{
    BlockPos, BlockType, Chunk, ChunkCoord, ChunkGenerator, CircuitResolver, Interaction, Power,
    StreamingController, World,
};
