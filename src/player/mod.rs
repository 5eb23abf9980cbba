pub mod input;
pub mod inventory;
pub mod mob;
pub mod physics;

pub use input::PlayerInput;
pub use inventory::{Inventory, ItemStack, HOTBAR_SIZE};
pub use mob::{Mob, MobKind};
pub use physics::{PhysicsStep, PlayerPhysics};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

pub const MAX_BAR: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Hardcore,
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Survival => "survival",
            GameMode::Creative => "creative",
            GameMode::Hardcore => "hardcore",
        })
    }
}

/// Position, resource bars and mode of the local player.
///
/// Bars are kept in `[0, MAX_BAR]`. Fields are only written by the game
/// state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub(crate) position: Vec3,
    pub(crate) selected_slot: usize,
    pub(crate) health: f32,
    pub(crate) hunger: f32,
    pub(crate) stamina: f32,
    pub(crate) game_mode: GameMode,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 20.0, 0.0),
            selected_slot: 0,
            health: MAX_BAR,
            hunger: MAX_BAR,
            stamina: MAX_BAR,
            game_mode: GameMode::Survival,
        }
    }
}

impl PlayerState {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub(crate) fn adjust_stamina(&mut self, delta: f32) {
        self.stamina = (self.stamina + delta).clamp(0.0, MAX_BAR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let player = PlayerState::default();
        assert_eq!(player.position(), Vec3::new(0.0, 20.0, 0.0));
        assert_eq!(player.health(), 100.0);
        assert_eq!(player.game_mode(), GameMode::Survival);
    }

    #[test]
    fn test_stamina_is_clamped() {
        let mut player = PlayerState::default();
        player.adjust_stamina(25.0);
        assert_eq!(player.stamina(), 100.0);
        player.adjust_stamina(-250.0);
        assert_eq!(player.stamina(), 0.0);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(GameMode::Hardcore.to_string(), "hardcore");
        let json = serde_json::to_string(&GameMode::Creative).unwrap();
        assert_eq!(json, "\"creative\"");
    }
}
