use anyhow::{Context, Result};
use log::{info, warn};
use simple_logger::SimpleLogger;

use voxelverse::{
    config::{default_config_path, load_or_create_config, EngineConfig},
    engine::VoxelEngine,
    oracle::{ask_oracle, AdviceError, AdviceService},
    player::PlayerInput,
    world::{BlockPos, BlockType, Interaction},
};

const FRAME_DT: f32 = 1.0 / 60.0;

/// Stand-in used when no advice backend is configured.
struct Offline;

impl AdviceService for Offline {
    fn ask(&self, _prompt: &str, _context: &str) -> Result<String, AdviceError> {
        Err(AdviceError::MissingCredential)
    }
}

fn load_config() -> EngineConfig {
    match default_config_path().and_then(|path| load_or_create_config(&path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Using default config: {e:#}");
            EngineConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let config = load_config();
    SimpleLogger::new().with_level(config.level_filter()).init()?;
    info!("Starting VoxelVerse session...");

    let mut engine = VoxelEngine::new(config);

    let walk = PlayerInput {
        right: true,
        ..Default::default()
    };
    for _ in 0..360 {
        engine.tick(FRAME_DT, &walk);
    }
    let state = engine.snapshot();
    info!(
        "Player at {} with {} resident chunks",
        state.player().position(),
        state.world().chunk_count()
    );

    let lever = BlockPos::new(0, 25, 0);
    let lamp = BlockPos::new(1, 25, 0);
    engine.add_block(lever, BlockType::LEVER);
    engine.add_block(lamp, BlockType::REDSTONE_LAMP);
    if let Interaction::Toggled { power, updated, .. } = engine.interact_block(lever) {
        info!("Lever is {:?}, {} lamp(s) updated", power, updated.len());
    }

    engine.toggle_crafting(Some(true));
    match engine.craft(BlockType::LEVER) {
        Ok(()) => info!(
            "Crafted a lever, now holding {}",
            engine.state().inventory().count_of(BlockType::LEVER)
        ),
        Err(e) => warn!("Crafting failed: {}", e),
    }

    let reply = ask_oracle(&Offline, "What should I build?", &engine.state().advice_context());
    info!("Oracle: {}", reply);

    if let Some(path) = std::env::args().nth(1) {
        let export = engine.state().world().export();
        let json = serde_json::to_string(&export).context("Failed to encode world export")?;
        std::fs::write(&path, json).with_context(|| format!("Failed to write {path}"))?;
        info!("Exported {} chunks to {}", export.len(), path);
    }

    let stats = engine.get_stats();
    info!(
        "Finished after {} frames: {} chunks, {} blocks",
        stats.frame_count, stats.resident_chunks, stats.blocks
    );
    Ok(())
}
