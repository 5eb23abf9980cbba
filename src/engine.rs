use crate::config::{EngineConfig, GameplayConfig};
use crate::crafting::{self, CraftingError};
use crate::environment::{Weather, WorldClock};
use crate::player::{
    GameMode, Inventory, Mob, MobKind, PlayerInput, PlayerPhysics, PlayerState, HOTBAR_SIZE,
};
use crate::utils::error::InventoryError;
use crate::world::{
    BlockPos, BlockType, ChunkGenerator, CircuitResolver, Interaction, StreamingController, World,
};
use glam::Vec3;
use log::{debug, info};

/// Block placed when the selected hotbar slot is empty.
const FALLBACK_PLACE_BLOCK: BlockType = BlockType::Dirt;

/// Immutable snapshot of a whole session.
///
/// Cloning is cheap: chunks are shared. Every transition returns a new value
/// and leaves `self` untouched, so a renderer holding an older snapshot keeps
/// reading a fully applied state.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    world: World,
    player: PlayerState,
    inventory: Inventory,
    mobs: Vec<Mob>,
    clock: WorldClock,
    weather: Weather,
    crafting_open: bool,
}

impl GameState {
    /// Session defaults: starter kit, full bars, clear morning, nothing loaded.
    pub fn new() -> Self {
        Self {
            inventory: Inventory::starter(),
            ..Self::default()
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn mobs(&self) -> &[Mob] {
        &self.mobs
    }

    pub fn clock(&self) -> WorldClock {
        self.clock
    }

    pub fn weather(&self) -> Weather {
        self.weather
    }

    pub fn is_crafting_open(&self) -> bool {
        self.crafting_open
    }

    pub fn get_block(&self, pos: BlockPos) -> Option<BlockType> {
        self.world.get_block(pos)
    }

    /// Block the player would place right now.
    pub fn selected_block(&self) -> BlockType {
        self.inventory
            .slot(self.player.selected_slot)
            .map_or(FALLBACK_PLACE_BLOCK, |stack| stack.block)
    }

    /// Context line handed to the advice service.
    pub fn advice_context(&self) -> String {
        format!(
            "Mode: {}. Stamina: {:.0}. Weather: {}.",
            self.player.game_mode, self.player.stamina, self.weather
        )
    }

    fn with_world(&self, world: World) -> Self {
        Self {
            world,
            ..self.clone()
        }
    }

    pub fn add_block(&self, pos: BlockPos, block: BlockType) -> Self {
        self.with_world(self.world.set_block(pos, block))
    }

    pub fn remove_block(&self, pos: BlockPos) -> Self {
        self.with_world(self.world.remove_block(pos))
    }

    /// Places the selected hotbar block at an already resolved empty cell.
    pub fn place_selected(&self, pos: BlockPos) -> Self {
        self.add_block(pos, self.selected_block())
    }

    pub fn interact_block(&self, pos: BlockPos, resolver: &CircuitResolver) -> (Self, Interaction) {
        let (world, outcome) = resolver.interact(&self.world, pos);
        let mut next = self.with_world(world);
        if outcome == Interaction::OpenCrafting {
            next.crafting_open = true;
        }
        (next, outcome)
    }

    /// Moves the player and streams in any chunk the new window needs.
    pub fn set_player_position(
        &self,
        position: Vec3,
        streaming: &mut StreamingController,
        generator: &mut ChunkGenerator,
    ) -> Self {
        let world = streaming.update(&self.world, position, generator);
        let mut next = self.with_world(world);
        next.player.position = position;
        next
    }

    pub fn select_slot(&self, slot: usize) -> Result<Self, InventoryError> {
        if slot >= HOTBAR_SIZE {
            return Err(InventoryError::SlotOutOfRange(slot));
        }
        let mut next = self.clone();
        next.player.selected_slot = slot;
        Ok(next)
    }

    /// `Some(open)` forces the crafting panel state, `None` flips it.
    pub fn toggle_crafting(&self, open: Option<bool>) -> Self {
        let mut next = self.clone();
        next.crafting_open = open.unwrap_or(!self.crafting_open);
        next
    }

    pub fn craft(&self, result: BlockType) -> Result<Self, CraftingError> {
        if !self.crafting_open {
            return Err(CraftingError::StationClosed);
        }
        let recipe = crafting::find_recipe(result)?;
        let mut next = self.clone();
        next.inventory = crafting::craft(&self.inventory, recipe)?;
        Ok(next)
    }

    /// Adds a mob at full health with the next free id.
    pub fn spawn_mob(&self, kind: MobKind, position: Vec3) -> Self {
        let id = self.mobs.iter().map(|mob| mob.id.saturating_add(1)).max().unwrap_or(0);
        let mut next = self.clone();
        next.mobs.push(Mob::new(id, kind, position));
        next
    }

    pub fn set_game_mode(&self, mode: GameMode) -> Self {
        let mut next = self.clone();
        next.player.game_mode = mode;
        next
    }

    pub fn set_weather(&self, weather: Weather) -> Self {
        let mut next = self.clone();
        next.weather = weather;
        next
    }

    /// Advances the clock and settles stamina for one tick.
    pub fn advance(&self, dt: f32, sprinted: bool, gameplay: &GameplayConfig) -> Self {
        let mut next = self.clone();
        next.clock = self.clock.advanced(dt, gameplay.day_length_secs);
        if sprinted {
            next.player.adjust_stamina(-gameplay.sprint_stamina_cost * dt);
        } else {
            next.player.adjust_stamina(gameplay.stamina_regen * dt);
        }
        next
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub frame_count: u64,
    pub resident_chunks: usize,
    pub blocks: usize,
}

/// Single writer for the session: owns the current [`GameState`] and the
/// stateful collaborators, and replaces the state as a whole on every event.
pub struct VoxelEngine {
    state: GameState,
    generator: ChunkGenerator,
    streaming: StreamingController,
    resolver: CircuitResolver,
    physics: PlayerPhysics,
    frame_counter: u64,
    pub config: EngineConfig,
}

impl VoxelEngine {
    /// Starts a session and streams in the window around the spawn point.
    pub fn new(config: EngineConfig) -> Self {
        let mut generator = ChunkGenerator::new(config.worldgen.clone());
        let mut streaming = StreamingController::from_config(&config.chunksys);
        let initial = GameState::new();
        let spawn = initial.player.position;
        let state = initial.set_player_position(spawn, &mut streaming, &mut generator);

        info!(
            "Session started at {} with {} resident chunks",
            spawn,
            state.world.chunk_count()
        );

        Self {
            state,
            generator,
            streaming,
            resolver: CircuitResolver::default(),
            physics: PlayerPhysics::new(config.gameplay.clone()),
            frame_counter: 0,
            config,
        }
    }

    /// Current snapshot; consumers re-fetch each frame.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn get_block(&self, pos: BlockPos) -> Option<BlockType> {
        self.state.get_block(pos)
    }

    pub fn add_block(&mut self, pos: BlockPos, block: BlockType) {
        self.state = self.state.add_block(pos, block);
    }

    pub fn remove_block(&mut self, pos: BlockPos) {
        self.state = self.state.remove_block(pos);
    }

    pub fn place_selected(&mut self, pos: BlockPos) {
        self.state = self.state.place_selected(pos);
    }

    pub fn interact_block(&mut self, pos: BlockPos) -> Interaction {
        let (state, outcome) = self.state.interact_block(pos, &self.resolver);
        self.state = state;
        outcome
    }

    pub fn set_player_position(&mut self, position: Vec3) {
        self.state =
            self.state
                .set_player_position(position, &mut self.streaming, &mut self.generator);
    }

    pub fn select_slot(&mut self, slot: usize) -> Result<(), InventoryError> {
        self.state = self.state.select_slot(slot)?;
        Ok(())
    }

    pub fn toggle_crafting(&mut self, open: Option<bool>) {
        self.state = self.state.toggle_crafting(open);
    }

    pub fn craft(&mut self, result: BlockType) -> Result<(), CraftingError> {
        self.state = self.state.craft(result)?;
        Ok(())
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.state = self.state.set_game_mode(mode);
    }

    pub fn spawn_mob(&mut self, kind: MobKind, position: Vec3) {
        self.state = self.state.spawn_mob(kind, position);
    }

    pub fn set_weather(&mut self, weather: Weather) {
        self.state = self.state.set_weather(weather);
    }

    /// One simulation frame: movement against the grid, streaming, clock and
    /// stamina.
    pub fn tick(&mut self, dt: f32, input: &PlayerInput) {
        let step = self.physics.step(
            self.state.player.position,
            input,
            self.state.player.stamina,
            dt,
            &self.state.world,
        );
        if step.position != self.state.player.position {
            self.set_player_position(step.position);
        }
        self.state = self.state.advance(dt, step.sprinted, &self.config.gameplay);
        self.frame_counter += 1;
        debug!("Frame {} at {}", self.frame_counter, step.position);
    }

    pub fn get_stats(&self) -> EngineStats {
        EngineStats {
            frame_count: self.frame_counter,
            resident_chunks: self.state.world.chunk_count(),
            blocks: self.state.world.block_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{ChunkCoord, Power};
    use crate::world::generator::height::height;

    fn test_config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.worldgen.seed = Some(12345);
        config
    }

    #[test]
    fn test_spawn_window_is_resident() {
        let engine = VoxelEngine::new(test_config());
        assert_eq!(engine.get_stats().resident_chunks, 25);
        let h = height(5, 5);
        assert_eq!(
            engine.get_block(BlockPos::new(5, h + 1, 5)),
            Some(BlockType::CraftingTable)
        );
    }

    #[test]
    fn test_snapshots_are_stable() {
        let mut engine = VoxelEngine::new(test_config());
        let before = engine.snapshot();
        engine.add_block(BlockPos::new(5, 30, 5), BlockType::Stone);

        assert_eq!(before.get_block(BlockPos::new(5, 30, 5)), None);
        assert_eq!(
            engine.snapshot().get_block(BlockPos::new(5, 30, 5)),
            Some(BlockType::Stone)
        );
        assert!(!before.world().ptr_eq(engine.state().world()));
    }

    #[test]
    fn test_add_remove_round_trip() {
        let mut engine = VoxelEngine::new(test_config());
        let pos = BlockPos::new(5, 10, 5);
        engine.add_block(pos, BlockType::Stone);
        assert_eq!(engine.get_block(pos), Some(BlockType::Stone));
        engine.remove_block(pos);
        assert_eq!(engine.get_block(pos), None);
    }

    #[test]
    fn test_crafting_table_interaction_opens_panel() {
        let mut engine = VoxelEngine::new(test_config());
        let table = BlockPos::new(5, height(5, 5) + 1, 5);
        let world_before = engine.snapshot();

        assert_eq!(engine.interact_block(table), Interaction::OpenCrafting);
        assert!(engine.state().is_crafting_open());
        assert!(engine.state().world().ptr_eq(world_before.world()));
    }

    #[test]
    fn test_lever_lamp_through_engine() {
        let mut engine = VoxelEngine::new(test_config());
        let lever = BlockPos::new(0, 30, 0);
        let lamp = BlockPos::new(0, 31, 0);
        engine.add_block(lever, BlockType::LEVER);
        engine.add_block(lamp, BlockType::REDSTONE_LAMP);

        engine.interact_block(lever);
        assert_eq!(engine.get_block(lamp), Some(BlockType::RedstoneLamp(Power::On)));
        engine.interact_block(lever);
        assert_eq!(engine.get_block(lamp), Some(BlockType::REDSTONE_LAMP));
    }

    #[test]
    fn test_place_selected_uses_hotbar() {
        let mut engine = VoxelEngine::new(test_config());
        engine.select_slot(4).unwrap();
        engine.place_selected(BlockPos::new(1, 40, 1));
        assert_eq!(engine.get_block(BlockPos::new(1, 40, 1)), Some(BlockType::LEVER));

        engine.select_slot(8).unwrap();
        engine.place_selected(BlockPos::new(2, 40, 1));
        assert_eq!(engine.get_block(BlockPos::new(2, 40, 1)), Some(BlockType::Dirt));

        assert_eq!(engine.select_slot(9), Err(InventoryError::SlotOutOfRange(9)));
        assert_eq!(engine.state().player().selected_slot(), 8);
    }

    #[test]
    fn test_crafting_requires_open_station() {
        let mut engine = VoxelEngine::new(test_config());
        assert_eq!(engine.craft(BlockType::LEVER), Err(CraftingError::StationClosed));

        engine.toggle_crafting(None);
        engine.craft(BlockType::LEVER).unwrap();
        assert_eq!(engine.state().inventory().count_of(BlockType::LEVER), 11);

        engine.toggle_crafting(Some(false));
        assert!(!engine.state().is_crafting_open());
    }

    #[test]
    fn test_moving_streams_new_chunks() {
        let mut engine = VoxelEngine::new(test_config());
        engine.set_player_position(Vec3::new(20.0, 20.0, 0.0));
        let world = engine.state().world();
        assert_eq!(world.chunk_count(), 30);
        assert!(world.is_resident(ChunkCoord::new(3, 0)));
        assert!(world.is_resident(ChunkCoord::new(-2, 0)));
        assert_eq!(engine.state().player().position(), Vec3::new(20.0, 20.0, 0.0));
    }

    #[test]
    fn test_tick_advances_clock_and_stamina() {
        let mut engine = VoxelEngine::new(test_config());
        let start = engine.state().clock().time();
        let input = PlayerInput {
            forward: true,
            sprint: true,
            ..Default::default()
        };
        engine.tick(1.0, &input);

        let state = engine.state();
        assert!(state.clock().time() > start);
        assert_eq!(state.player().stamina(), 90.0);
        assert_eq!(engine.get_stats().frame_count, 1);

        engine.tick(1.0, &PlayerInput::default());
        assert_eq!(engine.state().player().stamina(), 95.0);
    }

    #[test]
    fn test_far_position_streams_edge_window() {
        let mut engine = VoxelEngine::new(test_config());
        engine.set_player_position(Vec3::new(3.0e9, 20.0, 0.0));
        let world = engine.state().world();
        assert!(world.is_resident(ChunkCoord::new(crate::world::chunk_coord::MAX_CHUNK, 0)));
        assert_eq!(world.chunk_count(), 25 + 15);
    }

    #[test]
    fn test_lever_on_grid_edge() {
        let mut engine = VoxelEngine::new(test_config());
        let lever = BlockPos::new(i32::MAX, 0, 0);
        let lamp = BlockPos::new(i32::MAX - 1, 0, 0);
        engine.add_block(lever, BlockType::LEVER);
        engine.add_block(lamp, BlockType::REDSTONE_LAMP);

        engine.interact_block(lever);
        assert_eq!(engine.get_block(lever), Some(BlockType::Lever(Power::On)));
        assert_eq!(engine.get_block(lamp), Some(BlockType::RedstoneLamp(Power::On)));
    }

    #[test]
    fn test_mobs_start_empty_and_get_fresh_ids() {
        let mut engine = VoxelEngine::new(test_config());
        assert!(engine.state().mobs().is_empty());
        let before = engine.snapshot();

        engine.spawn_mob(MobKind::Golem, Vec3::new(3.0, 12.0, 3.0));
        engine.spawn_mob(MobKind::Stalker, Vec3::new(-3.0, 12.0, 3.0));

        let ids: Vec<_> = engine.state().mobs().iter().map(|mob| mob.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(engine.state().mobs()[0].health, 100.0);
        assert!(before.mobs().is_empty());
    }

    #[test]
    fn test_mode_weather_and_context() {
        let mut engine = VoxelEngine::new(test_config());
        engine.set_game_mode(GameMode::Creative);
        engine.set_weather(Weather::Snow);
        assert_eq!(
            engine.state().advice_context(),
            "Mode: creative. Stamina: 100. Weather: snow."
        );
    }
}
