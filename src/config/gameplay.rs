use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub walk_speed: f32,
    pub sprint_multiplier: f32,
    pub gravity: f32,
    pub jump_force: f32,
    /// Eye height above the feet cell.
    pub eye_height: f32,
    /// Stamina drained per second of sprinting.
    pub sprint_stamina_cost: f32,
    pub min_sprint_stamina: f32,
    /// Stamina recovered per second while not sprinting.
    pub stamina_regen: f32,
    /// Falling below this y teleports the player back up.
    pub void_floor: f32,
    pub respawn_height: f32,
    /// Real seconds for one full day/night cycle.
    pub day_length_secs: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            walk_speed: 7.0,
            sprint_multiplier: 1.6,
            gravity: -30.0,
            jump_force: 10.0,
            eye_height: 1.6,
            sprint_stamina_cost: 10.0,
            min_sprint_stamina: 4.0,
            stamina_regen: 5.0,
            void_floor: -10.0,
            respawn_height: 30.0,
            day_length_secs: 600.0,
        }
    }
}
