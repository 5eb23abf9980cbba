pub mod chunksys;
pub mod core;
pub mod gameplay;
pub mod worldgen;

pub use chunksys::ChunkSysConfig;
pub use core::{default_config_path, load_or_create_config, EngineConfig};
pub use gameplay::GameplayConfig;
pub use worldgen::WorldGenConfig;
