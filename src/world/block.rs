use crate::utils::error::KeyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// On/off state carried by functional blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Power {
    #[default]
    Off,
    On,
}

impl Power {
    pub fn toggled(self) -> Self {
        match self {
            Power::Off => Power::On,
            Power::On => Power::Off,
        }
    }

    pub fn is_on(self) -> bool {
        self == Power::On
    }
}

/// Block identity with any state stripped off.
///
/// Circuit rules and recipes match on kinds so that a lamp is a lamp whether
/// it is lit or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    Wood,
    JungleWood,
    Leaf,
    Water,
    Sand,
    Snow,
    Ice,
    Cactus,
    Gold,
    Diamond,
    Lava,
    Obsidian,
    CraftingTable,
    Lever,
    RedstoneLamp,
}

/// A placed block. Functional blocks are (kind, power) pairs rather than
/// separate `_on` tags; the suffixed names only exist at the text boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Grass,
    Dirt,
    Stone,
    Wood,
    JungleWood,
    Leaf,
    Water,
    Sand,
    Snow,
    Ice,
    Cactus,
    Gold,
    Diamond,
    Lava,
    Obsidian,
    CraftingTable,
    Lever(Power),
    RedstoneLamp(Power),
}

impl BlockType {
    pub const ALL: [BlockType; 20] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Wood,
        BlockType::JungleWood,
        BlockType::Leaf,
        BlockType::Water,
        BlockType::Sand,
        BlockType::Snow,
        BlockType::Ice,
        BlockType::Cactus,
        BlockType::Gold,
        BlockType::Diamond,
        BlockType::Lava,
        BlockType::Obsidian,
        BlockType::CraftingTable,
        BlockType::Lever(Power::Off),
        BlockType::Lever(Power::On),
        BlockType::RedstoneLamp(Power::Off),
        BlockType::RedstoneLamp(Power::On),
    ];

    pub const LEVER: BlockType = BlockType::Lever(Power::Off);
    pub const REDSTONE_LAMP: BlockType = BlockType::RedstoneLamp(Power::Off);

    pub fn kind(self) -> BlockKind {
        match self {
            BlockType::Grass => BlockKind::Grass,
            BlockType::Dirt => BlockKind::Dirt,
            BlockType::Stone => BlockKind::Stone,
            BlockType::Wood => BlockKind::Wood,
            BlockType::JungleWood => BlockKind::JungleWood,
            BlockType::Leaf => BlockKind::Leaf,
            BlockType::Water => BlockKind::Water,
            BlockType::Sand => BlockKind::Sand,
            BlockType::Snow => BlockKind::Snow,
            BlockType::Ice => BlockKind::Ice,
            BlockType::Cactus => BlockKind::Cactus,
            BlockType::Gold => BlockKind::Gold,
            BlockType::Diamond => BlockKind::Diamond,
            BlockType::Lava => BlockKind::Lava,
            BlockType::Obsidian => BlockKind::Obsidian,
            BlockType::CraftingTable => BlockKind::CraftingTable,
            BlockType::Lever(_) => BlockKind::Lever,
            BlockType::RedstoneLamp(_) => BlockKind::RedstoneLamp,
        }
    }

    /// Power state for functional blocks, `None` for everything else.
    pub fn power(self) -> Option<Power> {
        match self {
            BlockType::Lever(power) | BlockType::RedstoneLamp(power) => Some(power),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Wood => "wood",
            BlockType::JungleWood => "jungle_wood",
            BlockType::Leaf => "leaf",
            BlockType::Water => "water",
            BlockType::Sand => "sand",
            BlockType::Snow => "snow",
            BlockType::Ice => "ice",
            BlockType::Cactus => "cactus",
            BlockType::Gold => "gold",
            BlockType::Diamond => "diamond",
            BlockType::Lava => "lava",
            BlockType::Obsidian => "obsidian",
            BlockType::CraftingTable => "crafting_table",
            BlockType::Lever(Power::Off) => "lever",
            BlockType::Lever(Power::On) => "lever_on",
            BlockType::RedstoneLamp(Power::Off) => "redstone_lamp",
            BlockType::RedstoneLamp(Power::On) => "redstone_lamp_on",
        }
    }

    /// Water is the only block the player can stand inside.
    pub fn is_solid(self) -> bool {
        self != BlockType::Water
    }

    pub fn is_functional(self) -> bool {
        matches!(
            self.kind(),
            BlockKind::CraftingTable | BlockKind::Lever | BlockKind::RedstoneLamp
        )
    }
}

impl Display for BlockType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockType {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .iter()
            .copied()
            .find(|block| block.name() == s)
            .ok_or_else(|| KeyError::UnknownBlock(s.to_string()))
    }
}

impl Serialize for BlockType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for block in BlockType::ALL {
            assert_eq!(block.name().parse::<BlockType>().unwrap(), block);
        }
    }

    #[test]
    fn test_on_suffix_is_boundary_only() {
        assert_eq!(BlockType::Lever(Power::On).name(), "lever_on");
        assert_eq!(BlockType::Lever(Power::On).kind(), BlockKind::Lever);
        assert_eq!(
            "redstone_lamp_on".parse::<BlockType>().unwrap(),
            BlockType::RedstoneLamp(Power::On)
        );
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!(matches!(
            "bedrock".parse::<BlockType>(),
            Err(KeyError::UnknownBlock(name)) if name == "bedrock"
        ));
    }

    #[test]
    fn test_power_only_on_functional_blocks() {
        assert_eq!(BlockType::Stone.power(), None);
        assert_eq!(BlockType::LEVER.power(), Some(Power::Off));
        assert!(BlockType::CraftingTable.is_functional());
        assert!(!BlockType::Water.is_solid());
    }

    #[test]
    fn test_serializes_as_external_name() {
        let json = serde_json::to_string(&BlockType::RedstoneLamp(Power::On)).unwrap();
        assert_eq!(json, "\"redstone_lamp_on\"");
        let back: BlockType = serde_json::from_str("\"jungle_wood\"").unwrap();
        assert_eq!(back, BlockType::JungleWood);
    }
}
