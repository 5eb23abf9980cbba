use crate::config::GameplayConfig;
use crate::player::input::PlayerInput;
use crate::world::block_pos::BlockPos;
use crate::world::store::World;
use glam::Vec3;

/// Outcome of one physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsStep {
    pub position: Vec3,
    pub on_ground: bool,
    /// Sprinted while actually moving; this is what costs stamina.
    pub sprinted: bool,
}

/// Per-frame movement against the block grid.
///
/// The player is a point at eye height. The cell `eye_height` below the eye
/// is the feet cell; any block other than water there counts as ground.
/// Horizontal movement is cancelled when the target eye or feet cell holds
/// any block, water included. Vertical movement is never blocked.
#[derive(Debug, Clone)]
pub struct PlayerPhysics {
    config: GameplayConfig,
    vertical_velocity: f32,
}

impl PlayerPhysics {
    pub fn new(config: GameplayConfig) -> Self {
        Self {
            config,
            vertical_velocity: 0.0,
        }
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    fn is_solid(world: &World, pos: BlockPos) -> bool {
        world.get_block(pos).is_some_and(|block| block.is_solid())
    }

    fn is_occupied(world: &World, pos: BlockPos) -> bool {
        world.get_block(pos).is_some()
    }

    pub fn step(
        &mut self,
        position: Vec3,
        input: &PlayerInput,
        stamina: f32,
        dt: f32,
        world: &World,
    ) -> PhysicsStep {
        let sprinting = input.sprint && stamina > self.config.min_sprint_stamina;
        let speed = if sprinting {
            self.config.walk_speed * self.config.sprint_multiplier
        } else {
            self.config.walk_speed
        };
        let horizontal = input.direction() * speed;

        self.vertical_velocity += self.config.gravity * dt;

        let feet = BlockPos::containing(position - Vec3::Y * self.config.eye_height);
        let on_ground = Self::is_solid(world, feet);
        if on_ground && self.vertical_velocity < 0.0 {
            self.vertical_velocity = 0.0;
            if input.jump {
                self.vertical_velocity = self.config.jump_force;
            }
        }

        let mut next = position;
        let target = Vec3::new(
            position.x + horizontal.x * dt,
            position.y + self.vertical_velocity * dt,
            position.z + horizontal.z * dt,
        );
        let head_blocked = Self::is_occupied(world, BlockPos::containing(target));
        let feet_blocked = Self::is_occupied(world, BlockPos::containing(target - Vec3::Y));
        if !head_blocked && !feet_blocked {
            next.x = target.x;
            next.z = target.z;
        }
        next.y = target.y;

        if next.y < self.config.void_floor {
            next.y = self.config.respawn_height;
            self.vertical_velocity = 0.0;
        }

        PhysicsStep {
            position: next,
            on_ground,
            sprinted: sprinting && input.is_moving(),
        }
    }
}

impl Default for PlayerPhysics {
    fn default() -> Self {
        Self::new(GameplayConfig::default())
    }
}
