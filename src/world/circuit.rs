use crate::world::block::{BlockKind, BlockType, Power};
use crate::world::block_pos::BlockPos;
use crate::world::store::World;
use log::debug;

/// How a neighbouring block reacts when a lever next to it changes power.
#[derive(Debug, Clone, Copy)]
pub struct SignalRule {
    pub receiver: BlockKind,
    pub react: fn(Power) -> BlockType,
}

fn drive_lamp(power: Power) -> BlockType {
    BlockType::RedstoneLamp(power)
}

/// Receivers driven by a lever. Lamps mirror the lever's power.
pub const DEFAULT_RULES: &[SignalRule] = &[SignalRule {
    receiver: BlockKind::RedstoneLamp,
    react: drive_lamp,
}];

/// Result of interacting with a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// A crafting table was used; the caller opens the crafting UI.
    OpenCrafting,
    Toggled {
        lever: BlockPos,
        power: Power,
        /// Neighbours whose state changed.
        updated: Vec<BlockPos>,
    },
    Ignored,
}

/// Applies interactions and the single-hop lever signal.
///
/// Only the six face neighbours of a toggled lever are consulted, and a
/// neighbour that changes does not signal further.
#[derive(Debug, Clone)]
pub struct CircuitResolver {
    rules: Vec<SignalRule>,
}

impl Default for CircuitResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl CircuitResolver {
    pub fn new(rules: Vec<SignalRule>) -> Self {
        Self { rules }
    }

    fn rule_for(&self, kind: BlockKind) -> Option<&SignalRule> {
        self.rules.iter().find(|rule| rule.receiver == kind)
    }

    pub fn interact(&self, world: &World, pos: BlockPos) -> (World, Interaction) {
        match world.get_block(pos) {
            Some(BlockType::CraftingTable) => (world.clone(), Interaction::OpenCrafting),
            Some(BlockType::Lever(power)) => self.toggle_lever(world, pos, power.toggled()),
            _ => (world.clone(), Interaction::Ignored),
        }
    }

    fn toggle_lever(&self, world: &World, pos: BlockPos, power: Power) -> (World, Interaction) {
        let mut next = world.set_block(pos, BlockType::Lever(power));
        let mut updated = Vec::new();

        for neighbor in pos.face_neighbors() {
            let Some(current) = next.get_block(neighbor) else {
                continue;
            };
            let Some(rule) = self.rule_for(current.kind()) else {
                continue;
            };
            let driven = (rule.react)(power);
            if driven != current {
                next = next.set_block(neighbor, driven);
                updated.push(neighbor);
            }
        }

        debug!(
            "Lever at {} switched {:?}, {} neighbours updated",
            pos,
            power,
            updated.len()
        );
        (
            next,
            Interaction::Toggled {
                lever: pos,
                power,
                updated,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lever_and_lamp() -> World {
        World::new()
            .set_block(BlockPos::new(0, 0, 0), BlockType::LEVER)
            .set_block(BlockPos::new(1, 0, 0), BlockType::REDSTONE_LAMP)
    }

    #[test]
    fn test_lever_drives_adjacent_lamp() {
        let resolver = CircuitResolver::default();
        let lever = BlockPos::new(0, 0, 0);
        let lamp = BlockPos::new(1, 0, 0);

        let (world, outcome) = resolver.interact(&lever_and_lamp(), lever);
        assert_eq!(world.get_block(lever), Some(BlockType::Lever(Power::On)));
        assert_eq!(world.get_block(lamp), Some(BlockType::RedstoneLamp(Power::On)));
        assert_eq!(
            outcome,
            Interaction::Toggled {
                lever,
                power: Power::On,
                updated: vec![lamp],
            }
        );

        let (world, _) = resolver.interact(&world, lever);
        assert_eq!(world.get_block(lever), Some(BlockType::LEVER));
        assert_eq!(world.get_block(lamp), Some(BlockType::REDSTONE_LAMP));
    }

    #[test]
    fn test_all_six_faces() {
        let resolver = CircuitResolver::default();
        let lever = BlockPos::new(10, 5, -3);
        let mut world = World::new().set_block(lever, BlockType::LEVER);
        for neighbor in lever.face_neighbors() {
            world = world.set_block(neighbor, BlockType::REDSTONE_LAMP);
        }

        let (world, _) = resolver.interact(&world, lever);
        assert!(lever
            .face_neighbors()
            .all(|n| world.get_block(n) == Some(BlockType::RedstoneLamp(Power::On))));
    }

    #[test]
    fn test_no_transitive_or_diagonal_propagation() {
        let resolver = CircuitResolver::default();
        let world = lever_and_lamp()
            .set_block(BlockPos::new(2, 0, 0), BlockType::REDSTONE_LAMP)
            .set_block(BlockPos::new(1, 1, 0), BlockType::REDSTONE_LAMP);

        let (world, _) = resolver.interact(&world, BlockPos::new(0, 0, 0));
        assert_eq!(
            world.get_block(BlockPos::new(2, 0, 0)),
            Some(BlockType::REDSTONE_LAMP)
        );
        assert_eq!(
            world.get_block(BlockPos::new(1, 1, 0)),
            Some(BlockType::REDSTONE_LAMP)
        );
    }

    #[test]
    fn test_lamp_already_matching_is_untouched() {
        let resolver = CircuitResolver::default();
        let world = World::new()
            .set_block(BlockPos::new(0, 0, 0), BlockType::LEVER)
            .set_block(BlockPos::new(0, 0, 1), BlockType::RedstoneLamp(Power::On));

        let (_, outcome) = resolver.interact(&world, BlockPos::new(0, 0, 0));
        assert_eq!(
            outcome,
            Interaction::Toggled {
                lever: BlockPos::new(0, 0, 0),
                power: Power::On,
                updated: vec![],
            }
        );
    }

    #[test]
    fn test_neighbor_across_chunk_border() {
        let resolver = CircuitResolver::default();
        let lever = BlockPos::new(-1, 4, 0);
        let lamp = BlockPos::new(0, 4, 0);
        let world = World::new()
            .set_block(lever, BlockType::LEVER)
            .set_block(lamp, BlockType::REDSTONE_LAMP);

        let (world, _) = resolver.interact(&world, lever);
        assert_eq!(world.get_block(lamp), Some(BlockType::RedstoneLamp(Power::On)));
    }

    #[test]
    fn test_crafting_table_opens_ui() {
        let resolver = CircuitResolver::default();
        let pos = BlockPos::new(5, 11, 5);
        let world = World::new().set_block(pos, BlockType::CraftingTable);
        let (after, outcome) = resolver.interact(&world, pos);
        assert_eq!(outcome, Interaction::OpenCrafting);
        assert!(after.ptr_eq(&world));
    }

    #[test]
    fn test_other_blocks_ignored() {
        let resolver = CircuitResolver::default();
        let world = World::new()
            .set_block(BlockPos::new(0, 0, 0), BlockType::REDSTONE_LAMP)
            .set_block(BlockPos::new(1, 0, 0), BlockType::Stone);

        for pos in [
            BlockPos::new(0, 0, 0),
            BlockPos::new(1, 0, 0),
            BlockPos::new(9, 9, 9),
        ] {
            let (after, outcome) = resolver.interact(&world, pos);
            assert_eq!(outcome, Interaction::Ignored);
            assert!(after.ptr_eq(&world));
        }
    }

    #[test]
    fn test_custom_rule_table() {
        fn melt(_: Power) -> BlockType {
            BlockType::Water
        }
        let resolver = CircuitResolver::new(vec![SignalRule {
            receiver: BlockKind::Ice,
            react: melt,
        }]);
        let world = World::new()
            .set_block(BlockPos::new(0, 0, 0), BlockType::LEVER)
            .set_block(BlockPos::new(0, 0, 1), BlockType::Ice)
            .set_block(BlockPos::new(1, 0, 0), BlockType::REDSTONE_LAMP);

        let (world, _) = resolver.interact(&world, BlockPos::new(0, 0, 0));
        assert_eq!(world.get_block(BlockPos::new(0, 0, 1)), Some(BlockType::Water));
        assert_eq!(
            world.get_block(BlockPos::new(1, 0, 0)),
            Some(BlockType::REDSTONE_LAMP)
        );
    }
}
