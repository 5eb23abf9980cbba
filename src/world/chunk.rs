use crate::world::block::BlockType;
use crate::world::block_pos::BlockPos;
use crate::world::chunk_coord::ChunkCoord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Sparse block content of one 16×16 column. Cells missing from the map are
/// air. Positions are absolute world coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    coord: ChunkCoord,
    blocks: HashMap<BlockPos, BlockType>,
}

/// Text-keyed form of a chunk, in the external `"cx,cz"` / `"x,y,z"` formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedChunk {
    pub key: String,
    pub blocks: BTreeMap<String, BlockType>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: HashMap::new(),
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Whether the column of `pos` lies inside this chunk.
    pub fn owns(&self, pos: BlockPos) -> bool {
        ChunkCoord::of(pos) == self.coord
    }

    pub fn get(&self, pos: BlockPos) -> Option<BlockType> {
        self.blocks.get(&pos).copied()
    }

    /// Returns the block previously in the cell.
    pub fn set(&mut self, pos: BlockPos, block: BlockType) -> Option<BlockType> {
        debug_assert!(self.owns(pos), "{pos} is outside chunk {}", self.coord);
        self.blocks.insert(pos, block)
    }

    pub fn remove(&mut self, pos: BlockPos) -> Option<BlockType> {
        self.blocks.remove(&pos)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, BlockType)> + '_ {
        self.blocks.iter().map(|(pos, block)| (*pos, *block))
    }

    pub fn to_serialized(&self) -> SerializedChunk {
        SerializedChunk {
            key: self.coord.to_string(),
            blocks: self
                .blocks
                .iter()
                .map(|(pos, block)| (pos.to_string(), *block))
                .collect(),
        }
    }
}
