use crate::world::block::BlockType;
use crate::world::block_pos::BlockPos;
use crate::world::chunk::{Chunk, SerializedChunk};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::generator::ChunkGenerator;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Text-keyed snapshot of every resident chunk: chunk key → block key → block.
pub type WorldExport = BTreeMap<String, BTreeMap<String, BlockType>>;

/// Immutable map of resident chunks.
///
/// Mutations never touch `self`; they return a new `World` that shares every
/// untouched chunk with its predecessor. An operation that changes nothing
/// hands back a world for which [`World::ptr_eq`] holds, so consumers can
/// detect changes by identity.
#[derive(Debug, Clone, Default)]
pub struct World {
    chunks: Arc<HashMap<ChunkCoord, Arc<Chunk>>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both values are the same snapshot.
    pub fn ptr_eq(&self, other: &World) -> bool {
        Arc::ptr_eq(&self.chunks, &other.chunks)
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Arc<Chunk>> {
        self.chunks.get(&coord)
    }

    pub fn is_resident(&self, coord: ChunkCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn block_count(&self) -> usize {
        self.chunks.values().map(|chunk| chunk.len()).sum()
    }

    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    /// Looks up a cell without generating anything; a missing chunk reads as air.
    pub fn get_block(&self, pos: BlockPos) -> Option<BlockType> {
        self.chunks.get(&ChunkCoord::of(pos))?.get(pos)
    }

    /// Writes a cell. A non-resident owning chunk is created as an empty shell.
    pub fn set_block(&self, pos: BlockPos, block: BlockType) -> World {
        if self.get_block(pos) == Some(block) {
            return self.clone();
        }

        let coord = ChunkCoord::of(pos);
        let mut chunks = (*self.chunks).clone();
        let chunk = chunks
            .entry(coord)
            .or_insert_with(|| Arc::new(Chunk::new(coord)));
        Arc::make_mut(chunk).set(pos, block);
        Self {
            chunks: Arc::new(chunks),
        }
    }

    /// Clears a cell back to air. Missing chunk or key leaves the world as is.
    pub fn remove_block(&self, pos: BlockPos) -> World {
        let coord = ChunkCoord::of(pos);
        if self.get_block(pos).is_none() {
            return self.clone();
        }

        let mut chunks = (*self.chunks).clone();
        if let Some(chunk) = chunks.get_mut(&coord) {
            Arc::make_mut(chunk).remove(pos);
        }
        Self {
            chunks: Arc::new(chunks),
        }
    }

    /// Generates and inserts `coord` if it is not resident yet. An existing
    /// chunk is never regenerated.
    pub fn ensure_chunk(&self, coord: ChunkCoord, generator: &mut ChunkGenerator) -> World {
        if self.is_resident(coord) {
            return self.clone();
        }
        self.with_chunks(vec![generator.generate(coord)])
    }

    /// Inserts a batch of chunks in a single replacement. Chunks whose
    /// coordinate is already resident are skipped.
    pub fn with_chunks(&self, batch: Vec<Chunk>) -> World {
        let mut fresh = batch
            .into_iter()
            .filter(|chunk| !self.is_resident(chunk.coord()))
            .peekable();
        if fresh.peek().is_none() {
            return self.clone();
        }

        let mut chunks = (*self.chunks).clone();
        for chunk in fresh {
            chunks.entry(chunk.coord()).or_insert_with(|| Arc::new(chunk));
        }
        Self {
            chunks: Arc::new(chunks),
        }
    }

    pub fn export(&self) -> WorldExport {
        self.chunks
            .values()
            .map(|chunk| {
                let SerializedChunk { key, blocks } = chunk.to_serialized();
                (key, blocks)
            })
            .collect()
    }
}
